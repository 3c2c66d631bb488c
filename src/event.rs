use crate::contact::ContactMessage;

#[derive(Debug)]
pub enum PageEvent {
    ContentLoaded,
    ThemeToggled,
    ContactSubmitted(ContactMessage),
}
