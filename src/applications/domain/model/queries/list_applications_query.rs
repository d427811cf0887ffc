use crate::{
    applications::domain::model::enums::{
        application_domain_error::ApplicationDomainError, page_context::PageContext,
    },
    shared::domain::model::value_objects::username::Username,
};

#[derive(Clone, Debug)]
pub struct ListApplicationsQuery {
    viewer: Username,
    page_context: PageContext,
}

impl ListApplicationsQuery {
    pub fn new(viewer: String, page_context: String) -> Result<Self, ApplicationDomainError> {
        Ok(Self {
            viewer: Username::new(viewer).map_err(|_| ApplicationDomainError::InvalidUsername)?,
            page_context: page_context.parse()?,
        })
    }

    pub fn viewer(&self) -> &Username {
        &self.viewer
    }

    pub fn page_context(&self) -> PageContext {
        self.page_context
    }
}
