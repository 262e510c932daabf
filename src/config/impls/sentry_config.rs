use crate::config::structs::sentry_config::SentryConfig;

impl Default for SentryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dsn: String::new(),
            debug: false,
            sample_rate: 1.0,
            max_breadcrumbs: 100,
            attach_stacktrace: true,
            send_default_pii: false,
            traces_sample_rate: 1.0
        }
    }
}

impl SentryConfig {
    pub fn client_options(&self) -> sentry::ClientOptions {
        sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: self.debug,
            sample_rate: self.sample_rate,
            max_breadcrumbs: self.max_breadcrumbs,
            attach_stacktrace: self.attach_stacktrace,
            send_default_pii: self.send_default_pii,
            traces_sample_rate: self.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }
    }
}
