pub mod config;
pub mod contact;
pub mod editable;
pub mod form;
pub mod image_pool;
pub mod indicator;
pub mod page;
pub mod randomizer;
pub mod scroll;

pub use config::{ImageSlot, SiteConfig};
pub use contact::{
    ContactRecord, ContactStore, MemoryStorage, RecordStorage, RestoreOutcome, StoreError,
};
pub use form::{handle_submit, ContactForm, ContactSubmission, FormConfig};
pub use image_pool::{
    image_url, random_image_url, ImagePools, ImageSize, ImageSizeError, PoolKind,
};
pub use indicator::{IndicatorConfig, IndicatorState, SaveNotifier};
pub use page::PageDom;
pub use randomizer::{caption_selects_kitchen, randomize_images, RandomizeReport};
pub use scroll::{NavbarConfig, RevealConfig, RevealTracker, ScrollTracker};
