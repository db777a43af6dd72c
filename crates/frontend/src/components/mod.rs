mod devices_panel;
mod payments_panel;
mod profile_panel;
mod security_panel;
mod subscription_panel;

pub use devices_panel::DevicesPanel;
pub use payments_panel::PaymentsPanel;
pub use profile_panel::ProfilePanel;
pub use security_panel::SecurityPanel;
pub use subscription_panel::SubscriptionPanel;
