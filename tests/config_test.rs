use std::env;

use job_application_form::config::{get_config, init_config, LogFormat};
use job_application_form::{Error, FormService};

#[test]
fn initialised_config_drives_default_form() {
    env::set_var("FORM_TITLE", "Careers at Acme");
    env::set_var("LOG_FORMAT", "json");

    init_config().expect("init config");
    let config = get_config();
    assert_eq!(config.form_title, "Careers at Acme");
    assert_eq!(config.log_format, LogFormat::Json);

    assert!(matches!(init_config(), Err(Error::Config(_))));

    let html = FormService::default().view().to_html().expect("html");
    assert!(html.contains("Careers at Acme"));
    assert!(!html.contains("Job Application Form"));
}
