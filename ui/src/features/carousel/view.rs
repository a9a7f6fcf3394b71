use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::{platform, timing};
use crate::features::language::Localized;
use crate::features::reveal::{Reveal, RevealKind};
use crate::site::use_site;
use crate::t;

use super::state::{Carousel, ScheduledTick};

#[derive(Debug, Clone)]
enum CarouselEvent {
    Start,
    Select(usize),
    Pause,
    Resume,
    Tick { generation: u64 },
}

#[component]
pub fn Testimonials() -> Element {
    let site = use_site();
    let catalog = site.catalog;
    let period_ms = catalog.settings.autoplay_ms;
    let carousel = use_signal(|| Carousel::new(catalog.testimonials.len(), period_ms));

    let sender_slot = use_hook(|| Rc::new(RefCell::new(Option::<UnboundedSender<CarouselEvent>>::None)));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<CarouselEvent>| {
        let sender_slot = sender_slot_for_loop.clone();
        let mut carousel_signal = carousel;

        async move {
            while let Some(event) = rx.next().await {
                let schedule = carousel_signal.with_mut(|slot| {
                    let carousel = slot.as_mut()?;
                    match event {
                        CarouselEvent::Start | CarouselEvent::Resume => Some(carousel.start()),
                        CarouselEvent::Pause => {
                            carousel.pause();
                            None
                        }
                        CarouselEvent::Select(index) => match carousel.select(index) {
                            Ok(schedule) => Some(schedule),
                            Err(err) => {
                                tracing::warn!("ignoring testimonial selection: {err}");
                                None
                            }
                        },
                        CarouselEvent::Tick { generation } => carousel.tick(generation),
                    }
                });

                if let Some(schedule) = schedule {
                    queue_tick(sender_slot.clone(), schedule);
                }
            }
        }
    });

    sender_slot.borrow_mut().replace(coroutine.tx());

    use_hook(move || coroutine.send(CarouselEvent::Start));

    let dot_label = t!("testimonials-go-to");

    // No slides: render the heading only and never start autoplay ticks.
    let Some(state) = carousel() else {
        return rsx! {
            section { id: "testimonials", class: "testimonials",
                div { class: "container",
                    Reveal { kind: RevealKind::SectionTitle, index: 3,
                        h2 { Localized { id: "testimonials-title" } }
                    }
                }
            }
        };
    };

    rsx! {
        section { id: "testimonials", class: "testimonials",
            div { class: "container",
                Reveal { kind: RevealKind::SectionTitle, index: 3,
                    h2 { Localized { id: "testimonials-title" } }
                }

                div {
                    class: "testimonials-slider",
                    onmouseenter: move |_| coroutine.send(CarouselEvent::Pause),
                    onmouseleave: move |_| coroutine.send(CarouselEvent::Resume),

                    for (index, entry) in catalog.testimonials.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: if state.is_active(index) { "testimonial-item active" } else { "testimonial-item" },
                            i { class: "fas fa-quote-left testimonial-item__mark" }
                            blockquote { class: "testimonial-item__quote",
                                Localized { id: entry.quote.as_str() }
                            }
                            div { class: "testimonial-item__author",
                                strong { "{entry.author}" }
                                span { Localized { id: entry.role.as_str() } }
                            }
                        }
                    }

                    div { class: "testimonial-nav",
                        for index in 0..state.len() {
                            button {
                                key: "{index}",
                                r#type: "button",
                                class: if state.is_active(index) { "nav-dot active" } else { "nav-dot" },
                                aria_label: format!("{dot_label} {}", index + 1),
                                onclick: move |_| coroutine.send(CarouselEvent::Select(index)),
                            }
                        }
                    }
                }
            }
        }
    }
}

fn queue_tick(
    sender_slot: Rc<RefCell<Option<UnboundedSender<CarouselEvent>>>>,
    schedule: ScheduledTick,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(schedule.wait_ms).await;
            let _ = sender.unbounded_send(CarouselEvent::Tick {
                generation: schedule.generation,
            });
        });
    }
}
