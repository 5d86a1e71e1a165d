#![doc = include_str!("../README.md")]

pub use tintui_color as color;
pub use tintui_picker as picker;

#[doc(inline)]
pub use color::{Color, ColorData, ColorInput, Field, Hsla, Hsva, Rgba, RichColor};
#[doc(inline)]
pub use picker::{ChangeRejected, ColorPicker, Drafts, InputEvent, PickerSnapshot};

pub use nami as reactive;
pub use tracing as log;

pub mod prelude {
    //! A collection of commonly used types for easy importing.
    //!
    //! Everything a view surface or host application needs to drive the
    //! picker: the state machine, the edit payloads, the color value types,
    //! and the pointer geometry helpers.

    pub use crate::color::{
        Color, ColorData, ColorInput, Field, Hsla, Hsva, RichColor, Rgba, Source, is_valid_hex,
    };
    pub use crate::picker::{
        ChangeRejected, ColorPicker, Drafts, HslDraft, InputEvent, PickerSnapshot, RgbDraft,
        surface::{alpha_change, hue_change, saturation_change},
    };
}
