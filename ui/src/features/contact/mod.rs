mod state;
pub use state::{
    complete_submit, is_valid_email, submit_form, ContactForm, ContactSubmission, Field,
    SubmitPhase, ValidationError,
};

mod view;
pub use view::Contact;
