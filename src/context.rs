use cf_tracker::{
    catalog::{Catalog, TagFilter},
    error::BoxedError,
    judge::{Session, User},
    profile::Profile,
    tracker::{self, Template},
};

/// Everything the command loop keeps between commands.
pub struct Context {
    pub profile: Profile,
    pub session: Session,
    pub template: Template,
    pub catalog: Catalog,
    pub filter: TagFilter,
    pub user: Option<User>,
    pub state: Option<tracker::State>,
}

impl Context {
    pub fn new(profile: Profile) -> Result<Self, BoxedError> {
        Ok(Context {
            session: Session::with_options(profile.api.as_deref(), profile.proxy.as_deref())?,
            template: Template::new(profile.notification.as_str())?,
            catalog: Catalog::default(),
            filter: TagFilter::new(profile.tags.iter()),
            user: None,
            state: None,
            profile,
        })
    }
}
