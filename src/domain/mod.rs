// Domain layer: the phone number check and the widget value object.

pub mod phone;
pub mod widget;

pub use phone::{validate_phone_number, validate_phone_numbers, PhoneNumber, PHONE_NUMBER_LENGTH};
pub use widget::{Widget, WidgetBuilder};
