// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{PointerInput, ValueHsl};

/// This works w/ the pointer input routing in [`crate::ColorPicker`] to provide the
/// caller w/ information about whether an event has been consumed or not. If it has been
/// consumed, is a render necessary.
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum EventPropagation {
    ConsumedRender,
    Consumed,
    Propagate,
}

/// What a controller reports upward after handling pointer input.
#[derive(Clone, Debug, PartialEq, Copy)]
pub enum PickerEvent {
    /// Hue, saturation and lightness changed. Alpha is never carried.
    HslChange(ValueHsl),
    AlphaChange(f64),
    /// Press and release both landed on the color display control.
    ColorDisplayClick(PointerInput),
}

/// Where a change to the canonical value came from. The controller that originated a
/// change keeps its own pointer, everything else resyncs from the new value.
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum ChangeOrigin {
    /// [`crate::ColorPicker::set_value`], a preset swatch click, or construction.
    External,
    SaturationPlane,
    HueStrip,
    OpacityStrip,
}
