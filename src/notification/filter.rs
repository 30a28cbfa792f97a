use super::Notification;

/// Select the activations the given user has not acknowledged yet.
///
/// A notification is kept when its type is `Activation`, one of its
/// recipient records matches `identity_id`, and that record carries no
/// acknowledgement timestamp. Input order is preserved.
///
/// Each identity is expected to appear at most once per recipient list.
/// When it appears more than once, only the first record is consulted.
pub fn unacknowledged_notifications<'a>(
    notifications: &'a [Notification],
    identity_id: &str,
) -> Vec<&'a Notification> {
    notifications
        .iter()
        .filter(|notification| notification.is_unacknowledged_activation_for(identity_id))
        .collect()
}
