use std::sync::{Mutex, MutexGuard, PoisonError};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests in this module; they all mutate process env.
fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`env_guard`].
unsafe fn clear_mail_env() {
    unsafe {
        std::env::remove_var("CONTACT_ENABLED");
        std::env::remove_var("EMAILJS_SERVICE_ID");
        std::env::remove_var("EMAILJS_TEMPLATE_ID");
        std::env::remove_var("EMAILJS_PUBLIC_KEY");
        std::env::remove_var("EMAILJS_PRIVATE_KEY");
        std::env::remove_var("EMAILJS_BASE_URL");
        std::env::remove_var("EMAILJS_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("EMAILJS_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_uses_defaults() {
    let _env = env_guard();
    unsafe { clear_mail_env() };

    let cfg = EmailJsConfig::from_env().unwrap();
    assert_eq!(cfg.service_id, DEFAULT_SERVICE_ID);
    assert_eq!(cfg.template_id, DEFAULT_TEMPLATE_ID);
    assert_eq!(cfg.public_key, DEFAULT_PUBLIC_KEY);
    assert_eq!(cfg.private_key, None);
    assert_eq!(cfg.base_url, DEFAULT_EMAILJS_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        MailTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn from_env_reads_overrides() {
    let _env = env_guard();
    unsafe {
        clear_mail_env();
        std::env::set_var("EMAILJS_SERVICE_ID", " service_x ");
        std::env::set_var("EMAILJS_TEMPLATE_ID", "template_y");
        std::env::set_var("EMAILJS_PUBLIC_KEY", "pub");
        std::env::set_var("EMAILJS_PRIVATE_KEY", "priv");
        std::env::set_var("EMAILJS_BASE_URL", "http://127.0.0.1:9999/");
        std::env::set_var("EMAILJS_REQUEST_TIMEOUT_SECS", "30");
        std::env::set_var("EMAILJS_CONNECT_TIMEOUT_SECS", "2");
    }

    let cfg = EmailJsConfig::from_env().unwrap();
    assert_eq!(cfg.service_id, "service_x");
    assert_eq!(cfg.template_id, "template_y");
    assert_eq!(cfg.public_key, "pub");
    assert_eq!(cfg.private_key.as_deref(), Some("priv"));
    assert_eq!(cfg.base_url, "http://127.0.0.1:9999");
    assert_eq!(cfg.timeouts, MailTimeouts { request_secs: 30, connect_secs: 2 });

    unsafe { clear_mail_env() };
}

#[test]
fn invalid_timeouts_fall_back_to_defaults() {
    let _env = env_guard();
    unsafe {
        clear_mail_env();
        std::env::set_var("EMAILJS_REQUEST_TIMEOUT_SECS", "soon");
        std::env::set_var("EMAILJS_CONNECT_TIMEOUT_SECS", "0");
    }

    let cfg = EmailJsConfig::from_env().unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(cfg.timeouts.connect_secs, DEFAULT_CONNECT_TIMEOUT_SECS);

    unsafe { clear_mail_env() };
}

#[test]
fn blank_private_key_is_ignored() {
    let _env = env_guard();
    unsafe {
        clear_mail_env();
        std::env::set_var("EMAILJS_PRIVATE_KEY", "   ");
    }

    assert_eq!(EmailJsConfig::from_env().unwrap().private_key, None);

    unsafe { clear_mail_env() };
}

#[test]
fn empty_identifier_is_rejected() {
    let _env = env_guard();
    unsafe {
        clear_mail_env();
        std::env::set_var("EMAILJS_TEMPLATE_ID", "");
    }

    assert_eq!(EmailJsConfig::from_env(), Err(ConfigError::Empty { var: "EMAILJS_TEMPLATE_ID" }));

    unsafe { clear_mail_env() };
}

#[test]
fn contact_disabled_short_circuits() {
    let _env = env_guard();
    unsafe {
        clear_mail_env();
        std::env::set_var("CONTACT_ENABLED", "off");
    }

    assert_eq!(EmailJsConfig::from_env(), Err(ConfigError::Disabled));

    unsafe {
        std::env::set_var("CONTACT_ENABLED", "yes");
    }
    assert!(EmailJsConfig::from_env().is_ok());

    unsafe { clear_mail_env() };
}

// =============================================================================
// env_bool: unique env var names, so no guard needed.
// =============================================================================

#[test]
fn env_bool_true_and_false_variants() {
    for (i, (val, expected)) in [("1", true), ("YES", true), (" on ", true), ("0", false), ("False", false), ("off", false)]
        .iter()
        .enumerate()
    {
        let key = format!("__TEST_MAIL_EB_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(*expected), "unexpected result for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_or_unset_returns_none() {
    let key = "__TEST_MAIL_EB_INVALID__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_bool("__TEST_MAIL_EB_SURELY_UNSET__"), None);
}
