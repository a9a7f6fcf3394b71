mod state;
pub use state::{Autoplay, Carousel, CarouselError, ScheduledTick};

mod view;
pub use view::Testimonials;
