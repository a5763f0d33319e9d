//! Outbound notification port.

use crate::appointment::Appointment;

/// Delivery boundary for customer notifications.
///
/// Fire-and-forget from the scheduler's point of view: a failed delivery
/// must never fail or roll back the booking that triggered it, so the
/// methods are infallible.
pub trait Notifier {
    fn send_confirmation(&self, appointment: &Appointment);
    fn send_reminder(&self, appointment: &Appointment);
}

/// Notifier that drops every message, for when no delivery channel is
/// configured.
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn send_confirmation(&self, _appointment: &Appointment) {}
    fn send_reminder(&self, _appointment: &Appointment) {}
}
