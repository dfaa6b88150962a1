use std::sync::Arc;

use crate::domain::owner::model::{Owner, OwnerReceive, OwnerSend};
use crate::domain::owner::repository::OwnerRepository;
use crate::domain::owner::validation::OWNER_OBJECT;
use crate::domain::view::{Attribute, BindingResult, Model, View, ViewResult};
use crate::utils::errors::ApiError;

pub const CREATE_OR_UPDATE_OWNER_VIEW: &str = "owners/createOrUpdateOwnerForm";
pub const FIND_OWNERS_VIEW: &str = "owners/findOwners";
pub const OWNERS_LIST_VIEW: &str = "owners/ownersList";
pub const OWNER_DETAILS_VIEW: &str = "owners/ownerDetails";

pub const OWNER_KEY: &str = "owner";
pub const SELECTIONS_KEY: &str = "selections";

pub fn owner_url(id: i64) -> String {
    format!("/owners/{}", id)
}

/// Turns owner form submissions and lookups into view directives.
///
/// Each operation opens one repository session and holds it until it returns.
pub struct OwnerWorkflow<R: OwnerRepository> {
    repo: Arc<R>,
}

impl<R: OwnerRepository> OwnerWorkflow<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn init_creation_form(&self) -> ViewResult {
        owner_form(OwnerSend::default(), None)
    }

    pub async fn process_creation_form(&self, form: OwnerReceive) -> Result<ViewResult, ApiError> {
        let binding = form.validate();
        if binding.has_errors() {
            log::debug!("Rejected new owner with {} field error(s)", binding.field_errors.len());
            return Ok(owner_form(form.to_send(None), Some(binding)));
        }

        let mut session = self.repo.session().await?;
        let owner = self.repo.save(&mut session, Owner::new(form)).await?;
        let id = owner.id.ok_or_else(|| ApiError::InternalServerError("Saved owner has no id".to_string()))?;

        log::info!("Created owner {}", id);
        Ok(ViewResult::redirect(owner_url(id)))
    }

    pub fn init_find_form(&self) -> ViewResult {
        ViewResult::Render(View::new(
            FIND_OWNERS_VIEW,
            Model::new().with(OWNER_KEY, Attribute::Owner(OwnerSend::default())),
        ))
    }

    /// A missing or empty last name lists every owner.
    pub async fn process_find_form(&self, last_name: Option<String>) -> Result<ViewResult, ApiError> {
        let last_name = last_name.unwrap_or_default();

        let mut session = self.repo.session().await?;
        let mut results = self.repo.find_by_last_name(&mut session, &last_name).await?;

        match results.len() {
            0 => {
                let mut binding = BindingResult::new(OWNER_OBJECT);
                binding.reject_value("lastName", "notFound", "not found");

                let probe = OwnerSend { last_name, ..OwnerSend::default() };
                Ok(ViewResult::Render(
                    View::new(FIND_OWNERS_VIEW, Model::new().with(OWNER_KEY, Attribute::Owner(probe)))
                        .with_binding(binding),
                ))
            }
            1 => {
                let owner = results.remove(0);
                let id = owner.id.ok_or_else(|| ApiError::InternalServerError("Stored owner has no id".to_string()))?;
                Ok(ViewResult::redirect(owner_url(id)))
            }
            _ => {
                let selections = results.iter().map(Owner::to_send).collect();
                Ok(ViewResult::Render(View::new(
                    OWNERS_LIST_VIEW,
                    Model::new().with(SELECTIONS_KEY, Attribute::Owners(selections)),
                )))
            }
        }
    }

    pub async fn init_update_form(&self, id: i64) -> Result<ViewResult, ApiError> {
        let owner = self.find_existing(id).await?;
        Ok(owner_form(owner.to_send(), None))
    }

    /// Unknown ids are `ApiError::NotFound` and nothing is written.
    pub async fn process_update_form(&self, id: i64, form: OwnerReceive) -> Result<ViewResult, ApiError> {
        let binding = form.validate();
        if binding.has_errors() {
            log::debug!("Rejected update of owner {} with {} field error(s)", id, binding.field_errors.len());
            return Ok(owner_form(form.to_send(Some(id)), Some(binding)));
        }

        let mut session = self.repo.session().await?;
        self.repo.save(&mut session, Owner::with_id(id, form)).await?;

        log::info!("Updated owner {}", id);
        Ok(ViewResult::redirect(owner_url(id)))
    }

    pub async fn show_owner(&self, id: i64) -> Result<ViewResult, ApiError> {
        let owner = self.find_existing(id).await?;
        Ok(ViewResult::Render(View::new(
            OWNER_DETAILS_VIEW,
            Model::new().with(OWNER_KEY, Attribute::Owner(owner.to_send())),
        )))
    }

    async fn find_existing(&self, id: i64) -> Result<Owner, ApiError> {
        let mut session = self.repo.session().await?;
        self.repo
            .find_by_id(&mut session, id)
            .await?
            .ok_or_else(|| ApiError::owner_not_found(id))
    }
}

fn owner_form(owner: OwnerSend, binding: Option<BindingResult>) -> ViewResult {
    let view = View::new(
        CREATE_OR_UPDATE_OWNER_VIEW,
        Model::new().with(OWNER_KEY, Attribute::Owner(owner)),
    );

    ViewResult::Render(match binding {
        Some(binding) => view.with_binding(binding),
        None => view,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::owner_repository::InMemoryOwnerRepository;

    fn workflow() -> OwnerWorkflow<InMemoryOwnerRepository> {
        OwnerWorkflow::new(Arc::new(InMemoryOwnerRepository::new()))
    }

    fn form(first_name: &str, last_name: &str) -> OwnerReceive {
        OwnerReceive {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            address: "bhubanwswar".to_string(),
            city: "bhubaneswar".to_string(),
            telephone: "1234567890".to_string(),
        }
    }

    async fn stored(workflow: &OwnerWorkflow<InMemoryOwnerRepository>, id: i64) -> Option<Owner> {
        let repo = workflow.repository();
        let mut session = repo.session().await.unwrap();
        repo.find_by_id(&mut session, id).await.unwrap()
    }

    async fn seed(workflow: &OwnerWorkflow<InMemoryOwnerRepository>, receive: OwnerReceive) -> i64 {
        let repo = workflow.repository();
        let mut session = repo.session().await.unwrap();
        repo.save(&mut session, Owner::new(receive)).await.unwrap().id.unwrap()
    }

    #[tokio::test]
    async fn test_creation_form_has_errors() {
        let workflow = workflow();
        let submission = OwnerReceive {
            first_name: "sambit".to_string(),
            last_name: "Bloggs".to_string(),
            city: "London".to_string(),
            ..OwnerReceive::default()
        };

        let result = workflow.process_creation_form(submission).await.unwrap();
        let view = result.view().expect("form should be rendered");

        assert_eq!(view.name, CREATE_OR_UPDATE_OWNER_VIEW);
        assert!(view.has_errors());
        assert!(view.has_field_errors("address"));
        assert!(view.has_field_errors("telephone"));
        assert!(!view.has_field_errors("city"));
        assert_eq!(view.model.owner(OWNER_KEY).unwrap().first_name, "sambit");
        assert!(stored(&workflow, 1).await.is_none());
    }

    #[tokio::test]
    async fn test_creation_success_redirects_to_new_owner() {
        let workflow = workflow();
        let submission = OwnerReceive {
            first_name: "sambit1".to_string(),
            last_name: "Bloggs".to_string(),
            address: "cs pur".to_string(),
            city: "London".to_string(),
            telephone: "0123456789".to_string(),
        };

        let result = workflow.process_creation_form(submission).await.unwrap();

        let repo = workflow.repository();
        let mut session = repo.session().await.unwrap();
        let owner = repo.find_by_last_name(&mut session, "Bloggs").await.unwrap().remove(0);
        assert_eq!(owner.first_name, "sambit1");
        assert_eq!(result, ViewResult::Redirect(format!("/owners/{}", owner.id.unwrap())));
    }

    #[tokio::test]
    async fn test_repeated_creation_makes_distinct_owners() {
        let workflow = workflow();

        let first = workflow.process_creation_form(form("pankaj", "Moha")).await.unwrap();
        let second = workflow.process_creation_form(form("pankaj", "Moha")).await.unwrap();

        assert_eq!(first, ViewResult::redirect("/owners/1"));
        assert_eq!(second, ViewResult::redirect("/owners/2"));
    }

    #[tokio::test]
    async fn test_update_changes_only_submitted_last_name() {
        let workflow = workflow();
        let id = seed(&workflow, form("pankaj", "Moha")).await;

        let result = workflow.process_update_form(id, form("pankaj", "Mohanty")).await.unwrap();
        assert_eq!(result, ViewResult::Redirect(owner_url(id)));

        let edited = stored(&workflow, id).await.unwrap();
        assert_eq!(edited.last_name, "Mohanty");
        assert_eq!(edited.first_name, "pankaj");
        assert_eq!(edited.address, "bhubanwswar");
        assert_eq!(edited.city, "bhubaneswar");
        assert_eq!(edited.telephone, "1234567890");
    }

    #[tokio::test]
    async fn test_padded_telephone_is_not_persisted() {
        let workflow = workflow();
        let padded = OwnerReceive { telephone: "  0123456789  ".to_string(), ..form("sambit1", "Bloggs") };

        let result = workflow.process_creation_form(padded).await.unwrap();
        let view = result.view().expect("form should be rendered");

        assert!(view.has_field_errors("telephone"));
        assert!(stored(&workflow, 1).await.is_none());
    }

    #[tokio::test]
    async fn test_update_with_errors_keeps_stored_owner() {
        let workflow = workflow();
        let id = seed(&workflow, form("pankaj", "Moha")).await;

        let invalid = OwnerReceive { telephone: String::new(), ..form("pankaj", "Mohanty") };
        let result = workflow.process_update_form(id, invalid).await.unwrap();
        let view = result.view().unwrap();

        assert!(view.has_field_errors("telephone"));
        assert_eq!(view.model.owner(OWNER_KEY).unwrap().id, Some(id));
        assert_eq!(stored(&workflow, id).await.unwrap().last_name, "Moha");
    }

    #[tokio::test]
    async fn test_update_unknown_owner_is_not_found() {
        let workflow = workflow();

        let result = workflow.process_update_form(41, form("pankaj", "Mohanty")).await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
        assert!(stored(&workflow, 41).await.is_none());
    }

    #[tokio::test]
    async fn test_show_owner() {
        let workflow = workflow();
        let id = seed(&workflow, form("jeetendra", "samal")).await;

        let result = workflow.show_owner(id).await.unwrap();
        let view = result.view().unwrap();

        assert_eq!(view.name, OWNER_DETAILS_VIEW);
        let owner = view.model.owner(OWNER_KEY).unwrap();
        assert_eq!(owner.first_name, "jeetendra");
        assert_eq!(owner.last_name, "samal");
    }

    #[tokio::test]
    async fn test_show_unknown_owner_is_not_found() {
        assert!(matches!(workflow().show_owner(5).await, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_init_update_form_binds_stored_owner() {
        let workflow = workflow();
        let id = seed(&workflow, form("pankaj", "Moha")).await;

        let result = workflow.init_update_form(id).await.unwrap();
        let view = result.view().unwrap();

        assert_eq!(view.name, CREATE_OR_UPDATE_OWNER_VIEW);
        assert!(!view.has_errors());
        assert_eq!(view.model.owner(OWNER_KEY).unwrap().last_name, "Moha");
        assert!(matches!(workflow.init_update_form(id + 1).await, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_find_form_outcomes() {
        let workflow = workflow();

        let none = workflow.process_find_form(Some("Franklin".to_string())).await.unwrap();
        let view = none.view().unwrap();
        assert_eq!(view.name, FIND_OWNERS_VIEW);
        assert!(view.has_field_errors("lastName"));

        let franklin = seed(&workflow, form("George", "Franklin")).await;
        seed(&workflow, form("Harold", "Davis")).await;
        seed(&workflow, form("Betty", "Davis")).await;

        let one = workflow.process_find_form(Some("Franklin".to_string())).await.unwrap();
        assert_eq!(one, ViewResult::Redirect(owner_url(franklin)));

        let many = workflow.process_find_form(Some("Davis".to_string())).await.unwrap();
        let view = many.view().unwrap();
        assert_eq!(view.name, OWNERS_LIST_VIEW);
        assert_eq!(view.model.owners(SELECTIONS_KEY).unwrap().len(), 2);

        let all = workflow.process_find_form(None).await.unwrap();
        assert_eq!(all.view().unwrap().model.owners(SELECTIONS_KEY).unwrap().len(), 3);
    }

    #[test]
    fn test_init_forms_bind_empty_owner() {
        let workflow = workflow();

        let create = workflow.init_creation_form();
        assert_eq!(create.view().unwrap().name, CREATE_OR_UPDATE_OWNER_VIEW);
        assert_eq!(create.view().unwrap().model.owner(OWNER_KEY), Some(&OwnerSend::default()));

        let find = workflow.init_find_form();
        assert_eq!(find.view().unwrap().name, FIND_OWNERS_VIEW);
    }
}
