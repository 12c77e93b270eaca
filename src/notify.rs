/// Fire-and-forget OS notification. Delivery failures are logged and
/// otherwise ignored.
pub fn send(title: &str, body: &str) {
    if let Err(e) = notify_rust::Notification::new()
        .appname("Sit Reminder")
        .summary(title)
        .body(body)
        .show()
    {
        tracing::debug!("notification failed: {e}");
    }
}
