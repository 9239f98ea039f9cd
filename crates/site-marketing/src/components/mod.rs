//! Marketing site components

mod nav;
mod footer;
mod contact_form;
mod contact_section;
mod toaster;
mod whatsapp_icon;

pub use nav::MarketingNav;
pub use footer::Footer;
pub use contact_form::ContactForm;
pub use contact_section::ContactSection;
pub use toaster::{use_toaster, ToastEntry, ToastViewport, Toaster};
pub use whatsapp_icon::WhatsAppIcon;
