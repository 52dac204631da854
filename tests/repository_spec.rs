use briefing_core::RepositoryError;
use chrono::Utc;
use seo_briefing::models::*;
use seo_briefing::{BriefingComposer, ProjectRepository};
use speculate2::speculate;
use uuid::Uuid;

fn briefing(main: &str) -> BriefingDocument {
    BriefingComposer::default()
        .build_document(
            Uuid::new_v4(),
            &BriefingInput::new(KeywordSet::new(main)),
            Utc::now(),
        )
        .expect("Failed to build briefing")
}

fn ids(repo: &ProjectRepository) -> Vec<Uuid> {
    repo.list().into_iter().map(|doc| doc.id).collect()
}

speculate! {
    before {
        let repo = ProjectRepository::new();
    }

    describe "create" {
        it "appends in insertion order" {
            let a = briefing("betonverf");
            let b = briefing("muurverf");
            let c = briefing("vloerverf");
            repo.create(a.clone()).expect("create failed");
            repo.create(b.clone()).expect("create failed");
            repo.create(c.clone()).expect("create failed");

            assert_eq!(ids(&repo), vec![a.id, b.id, c.id]);
        }

        it "rejects a duplicate id" {
            let a = briefing("betonverf");
            repo.create(a.clone()).expect("create failed");

            let result = repo.create(a.clone());
            assert_eq!(result, Err(RepositoryError::DuplicateId(a.id)));
            assert_eq!(repo.len(), 1);
        }
    }

    describe "update" {
        it "replaces the entry in place" {
            let a = briefing("betonverf");
            let b = briefing("muurverf");
            repo.create(a.clone()).expect("create failed");
            repo.create(b.clone()).expect("create failed");

            let mut regenerated = BriefingComposer::default()
                .build_document(
                    a.id,
                    &BriefingInput::new(KeywordSet::new("betonverf buiten")),
                    a.created_at,
                )
                .expect("Failed to build briefing");
            regenerated.name = "Buiten".to_string();
            repo.update(regenerated.clone()).expect("update failed");

            let list = repo.list();
            assert_eq!(list.len(), 2);
            assert_eq!(list[0].id, a.id);
            assert_eq!(list[0].name, "Buiten");
            assert_eq!(list[0].content.landing_page, "betonverf buiten");
            assert_eq!(list[1].id, b.id);
        }

        it "reports an unknown id and leaves the list unchanged" {
            let a = briefing("betonverf");
            repo.create(a.clone()).expect("create failed");
            let before = repo.list();

            let stranger = briefing("muurverf");
            let result = repo.update(stranger.clone());

            assert_eq!(result, Err(RepositoryError::NotFound(stranger.id)));
            assert_eq!(repo.list(), before);
        }
    }

    describe "delete" {
        it "removes the entry" {
            let a = briefing("betonverf");
            let b = briefing("muurverf");
            repo.create(a.clone()).expect("create failed");
            repo.create(b.clone()).expect("create failed");

            let removed = repo.delete(a.id).expect("delete failed");

            assert_eq!(removed.id, a.id);
            assert_eq!(ids(&repo), vec![b.id]);
        }

        it "reports an unknown id" {
            let missing = Uuid::new_v4();
            assert_eq!(repo.delete(missing), Err(RepositoryError::NotFound(missing)));
            assert!(repo.is_empty());
        }

        it "clears the selection when the current briefing is deleted" {
            let a = briefing("betonverf");
            let b = briefing("muurverf");
            repo.create(a.clone()).expect("create failed");
            repo.create(b.clone()).expect("create failed");
            repo.set_current(b.id).expect("select failed");

            repo.delete(b.id).expect("delete failed");

            assert!(repo.current().is_none());
            assert!(repo.current_id().is_none());
        }
    }

    describe "current selection" {
        it "is unset for a new repository" {
            assert!(repo.current().is_none());
        }

        it "resolves against the live entry" {
            let a = briefing("betonverf");
            repo.create(a.clone()).expect("create failed");
            repo.set_current(a.id).expect("select failed");

            let mut renamed = a.clone();
            renamed.name = "Nieuwe naam".to_string();
            repo.update(renamed).expect("update failed");

            let current = repo.current().expect("no current briefing");
            assert_eq!(current.name, "Nieuwe naam");
        }

        it "can be cleared explicitly" {
            let a = briefing("betonverf");
            repo.create(a.clone()).expect("create failed");
            repo.set_current(a.id).expect("select failed");

            repo.clear_current();

            assert!(repo.current().is_none());
            assert_eq!(repo.len(), 1);
        }

        it "rejects an unknown id" {
            let missing = Uuid::new_v4();
            assert_eq!(repo.set_current(missing), Err(RepositoryError::NotFound(missing)));
            assert!(repo.current().is_none());
        }
    }

    describe "list" {
        it "returns copies that do not affect the store" {
            let a = briefing("betonverf");
            repo.create(a.clone()).expect("create failed");

            let mut list = repo.list();
            list[0].name = "gewijzigd".to_string();
            list.clear();

            assert_eq!(repo.get(a.id).expect("missing").name, "betonverf");
            assert_eq!(repo.len(), 1);
        }
    }
}
