// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::request::ServiceKind;
use lightpath_core::prelude::{Frequency, FrequencyDelta};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffGridCenterError {
    center: Frequency,
    step: FrequencyDelta,
}

impl OffGridCenterError {
    pub fn new(center: Frequency, step: FrequencyDelta) -> Self {
        Self { center, step }
    }

    pub fn center(&self) -> Frequency {
        self.center
    }
}

impl std::fmt::Display for OffGridCenterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Center frequency {} is not reachable from the anchor by multiples of {}",
            self.center, self.step
        )
    }
}

impl std::error::Error for OffGridCenterError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CenterOutOfBandError {
    center: Frequency,
    lower_edge: Frequency,
    upper_edge: Frequency,
}

impl CenterOutOfBandError {
    pub fn new(center: Frequency, lower_edge: Frequency, upper_edge: Frequency) -> Self {
        Self {
            center,
            lower_edge,
            upper_edge,
        }
    }

    pub fn center(&self) -> Frequency {
        self.center
    }
}

impl std::fmt::Display for CenterOutOfBandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Center frequency {} lies outside the band [{}, {}]",
            self.center, self.lower_edge, self.upper_edge
        )
    }
}

impl std::error::Error for CenterOutOfBandError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidSlotWidthError {
    width: FrequencyDelta,
    step: FrequencyDelta,
}

impl InvalidSlotWidthError {
    pub fn new(width: FrequencyDelta, step: FrequencyDelta) -> Self {
        Self { width, step }
    }

    pub fn width(&self) -> FrequencyDelta {
        self.width
    }
}

impl std::fmt::Display for InvalidSlotWidthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Slot width {} is not a positive multiple of {}",
            self.width, self.step
        )
    }
}

impl std::error::Error for InvalidSlotWidthError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotExceedsBandError {
    center: Frequency,
    width: FrequencyDelta,
}

impl SlotExceedsBandError {
    pub fn new(center: Frequency, width: FrequencyDelta) -> Self {
        Self { center, width }
    }
}

impl std::fmt::Display for SlotExceedsBandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Slot of width {} centered at {} exceeds the band edges",
            self.width, self.center
        )
    }
}

impl std::error::Error for SlotExceedsBandError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotValidationError {
    OffGridCenter(OffGridCenterError),
    CenterOutOfBand(CenterOutOfBandError),
    InvalidSlotWidth(InvalidSlotWidthError),
    SlotExceedsBand(SlotExceedsBandError),
}

impl std::fmt::Display for SlotValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotValidationError::OffGridCenter(e) => write!(f, "{}", e),
            SlotValidationError::CenterOutOfBand(e) => write!(f, "{}", e),
            SlotValidationError::InvalidSlotWidth(e) => write!(f, "{}", e),
            SlotValidationError::SlotExceedsBand(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SlotValidationError {}

impl From<OffGridCenterError> for SlotValidationError {
    fn from(err: OffGridCenterError) -> Self {
        SlotValidationError::OffGridCenter(err)
    }
}

impl From<CenterOutOfBandError> for SlotValidationError {
    fn from(err: CenterOutOfBandError) -> Self {
        SlotValidationError::CenterOutOfBand(err)
    }
}

impl From<InvalidSlotWidthError> for SlotValidationError {
    fn from(err: InvalidSlotWidthError) -> Self {
        SlotValidationError::InvalidSlotWidth(err)
    }
}

impl From<SlotExceedsBandError> for SlotValidationError {
    fn from(err: SlotExceedsBandError) -> Self {
        SlotValidationError::SlotExceedsBand(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnsupportedCustomSpectrumError {
    service: ServiceKind,
}

impl UnsupportedCustomSpectrumError {
    pub fn new(service: ServiceKind) -> Self {
        Self { service }
    }

    pub fn service(&self) -> ServiceKind {
        self.service
    }
}

impl std::fmt::Display for UnsupportedCustomSpectrumError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Service format {} does not allow a manual center frequency or slot width",
            self.service
        )
    }
}

impl std::error::Error for UnsupportedCustomSpectrumError {}

/// Which end of the service a request-level failure was detected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceEnd {
    AEnd,
    ZEnd,
}

impl std::fmt::Display for ServiceEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceEnd::AEnd => write!(f, "A-end"),
            ServiceEnd::ZEnd => write!(f, "Z-end"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestValidationCause {
    Format(UnsupportedCustomSpectrumError),
    Slot(SlotValidationError),
}

impl std::fmt::Display for RequestValidationCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestValidationCause::Format(e) => write!(f, "{}", e),
            RequestValidationCause::Slot(e) => write!(f, "{}", e),
        }
    }
}

impl From<UnsupportedCustomSpectrumError> for RequestValidationCause {
    fn from(err: UnsupportedCustomSpectrumError) -> Self {
        RequestValidationCause::Format(err)
    }
}

impl From<SlotValidationError> for RequestValidationCause {
    fn from(err: SlotValidationError) -> Self {
        RequestValidationCause::Slot(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestValidationError {
    end: ServiceEnd,
    cause: RequestValidationCause,
}

impl RequestValidationError {
    pub fn new(end: ServiceEnd, cause: RequestValidationCause) -> Self {
        Self { end, cause }
    }

    pub fn end(&self) -> ServiceEnd {
        self.end
    }

    pub fn cause(&self) -> &RequestValidationCause {
        &self.cause
    }
}

impl std::fmt::Display for RequestValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.end, self.cause)
    }
}

impl std::error::Error for RequestValidationError {}
