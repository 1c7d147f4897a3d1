use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static CONTENT_MUTATIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "creashift_content_mutations_total",
        "Content changes applied through the API",
        &["collection", "op"]
    )
    .expect("register content_mutations_total")
});

pub static LOGIN_ATTEMPTS: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "creashift_login_attempts_total",
        "Admin login attempts by outcome",
        &["outcome"]
    )
    .expect("register login_attempts_total")
});

pub static CONTACT_SUBMISSIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "creashift_contact_submissions_total",
        "Contact form submissions by outcome",
        &["outcome"]
    )
    .expect("register contact_submissions_total")
});

pub fn record_mutation(collection: &str, op: &str) {
    CONTENT_MUTATIONS.with_label_values(&[collection, op]).inc();
}

pub fn record_login(outcome: &str) {
    LOGIN_ATTEMPTS.with_label_values(&[outcome]).inc();
}

pub fn record_contact(outcome: &str) {
    CONTACT_SUBMISSIONS.with_label_values(&[outcome]).inc();
}

/// Text exposition of the default registry.
pub fn encode_metrics() -> String {
    // 先触发注册，保证首次抓取也能看到指标名
    Lazy::force(&CONTENT_MUTATIONS);
    Lazy::force(&LOGIN_ATTEMPTS);
    Lazy::force(&CONTACT_SUBMISSIONS);

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if encoder.encode(&metric_families, &mut buffer).is_err() {
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}
