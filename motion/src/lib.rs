//! Animation engine and interaction models for the marketing-site effects.
//!
//! This crate is pure: it never touches the DOM. The host (`pagefx`) registers
//! page elements as [`style::TargetId`]s, feeds pointer/scroll input and frame
//! deltas in, and copies the resulting CSS declarations back onto the elements.
//! Keeping the browser out of this layer means every timing rule can be tested
//! natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`ease`] | Named easing curves (`power2.out`, `elastic.out(1, 0.5)`, ...) |
//! | [`style`] | Animatable properties, values, the style book and CSS output |
//! | [`tween`] | Single property tweens with repeat/yoyo |
//! | [`timeline`] | Ordered, position-resolved groups of tweens |
//! | [`animator`] | Ticker-driven runtime owning running tweens and timelines |
//! | [`geom`] | Points, rectangles and range mapping |
//! | [`flair`] | Pointer-following hover flair for buttons |
//! | [`split`] | Pure text-to-glyph split for per-letter reveals |
//! | [`reveal`] | Hero entrance plan and its phase machine |
//! | [`marquee`] | Seamless looping logo rows |
//! | [`trigger`] | Scroll-position trigger regions |
//! | [`lock`] | Scoped page scroll lock |
//! | [`consts`] | Shared numeric constants |

pub mod animator;
pub mod consts;
pub mod ease;
pub mod flair;
pub mod geom;
pub mod lock;
pub mod marquee;
pub mod reveal;
pub mod split;
pub mod style;
pub mod timeline;
pub mod trigger;
pub mod tween;
