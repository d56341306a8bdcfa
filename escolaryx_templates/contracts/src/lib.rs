use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

pub const BASE_TEMPLATE: &str = include_str!("../templates/base.html");

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = stringify!($ident);
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    ContactConfirmationTemplate("contact_confirmation.html"),
    ContactConfirmationTextTemplate("contact_confirmation.txt"),
}

/// HTML body of the confirmation sent to a contact form submitter.
///
/// User supplied fields are escaped by the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactConfirmationTemplate {
    pub name: String,
    pub last_name: String,
    pub message: String,
    /// Content-ID of the inline banner image, without angle brackets.
    pub banner_cid: String,
}

/// Plain text alternative of [`ContactConfirmationTemplate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactConfirmationTextTemplate(pub ContactConfirmationTemplate);
