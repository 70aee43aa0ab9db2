use eksdocs::config::SiteConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: SiteConfig,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }
}
