use escolaryx_core_contact_impl::ContactFeatureServiceImpl;
use escolaryx_email_impl::{confirmation::ConfirmationEmailServiceImpl, EmailServiceImpl};
use escolaryx_tasks_impl::TaskServiceImpl;
use escolaryx_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = escolaryx_api_rest::RestServer<ContactFeature>;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<Tasks>;

// Tasks
pub type Tasks = TaskServiceImpl<Confirmation>;

// Email
pub type Email = EmailServiceImpl;
pub type Confirmation = ConfirmationEmailServiceImpl<Email, Template>;

// Templates
pub type Template = TemplateServiceImpl;
