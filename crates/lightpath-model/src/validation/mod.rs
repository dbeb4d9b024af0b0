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

//! Pre-search validation of a computation request against the frequency
//! grid. Every check here fires before any graph is built, so a malformed
//! request never costs a search.

pub mod err;

use crate::{
    request::{PathRequest, ServiceKind, SpectrumSelection},
    spectrum::grid::FrequencyGrid,
    validation::err::{
        CenterOutOfBandError, InvalidSlotWidthError, OffGridCenterError, RequestValidationError,
        ServiceEnd, SlotExceedsBandError, SlotValidationError, UnsupportedCustomSpectrumError,
    },
};
use lightpath_core::prelude::{Frequency, FrequencyDelta};

/// Validates manual center-frequency / slot-width pairs against a grid.
#[derive(Debug, Clone, Copy)]
pub struct SlotValidator<'g> {
    grid: &'g FrequencyGrid,
    center_step: FrequencyDelta,
    width_step: FrequencyDelta,
}

impl<'g> SlotValidator<'g> {
    /// Standard flexible-grid granularities: centers every 6.25 GHz,
    /// widths in multiples of 12.5 GHz.
    pub fn new(grid: &'g FrequencyGrid) -> Self {
        Self {
            grid,
            center_step: FrequencyDelta::from_ghz(6.25),
            width_step: FrequencyDelta::from_ghz(12.5),
        }
    }

    pub fn with_granularities(
        grid: &'g FrequencyGrid,
        center_step: FrequencyDelta,
        width_step: FrequencyDelta,
    ) -> Self {
        Self {
            grid,
            center_step,
            width_step,
        }
    }

    /// The center must be reachable from the anchor by a whole number of
    /// center-granularity steps and must lie within the band, edges
    /// included.
    pub fn validate_center_frequency(
        &self,
        center: Frequency,
    ) -> Result<(), SlotValidationError> {
        let offset = center - self.grid.anchor();
        if !offset.is_multiple_of(self.center_step) {
            return Err(OffGridCenterError::new(center, self.center_step))?;
        }
        if center < self.grid.lower_edge() || center > self.grid.upper_edge() {
            return Err(CenterOutOfBandError::new(
                center,
                self.grid.lower_edge(),
                self.grid.upper_edge(),
            ))?;
        }
        Ok(())
    }

    /// The width must be a positive whole number of width-granularity
    /// steps.
    pub fn validate_slot_width(&self, width: FrequencyDelta) -> Result<(), SlotValidationError> {
        if !width.is_positive() || !width.is_multiple_of(self.width_step) {
            return Err(InvalidSlotWidthError::new(width, self.width_step))?;
        }
        Ok(())
    }

    /// Full check of a manual selection: center and width individually,
    /// then `center ± width/2` against the band edges.
    pub fn validate_slot(&self, selection: &SpectrumSelection) -> Result<(), SlotValidationError> {
        self.validate_center_frequency(selection.center())?;
        self.validate_slot_width(selection.width())?;
        let half = selection.width() / 2;
        if selection.center() - half < self.grid.lower_edge()
            || selection.center() + half > self.grid.upper_edge()
        {
            return Err(SlotExceedsBandError::new(selection.center(), selection.width()))?;
        }
        Ok(())
    }
}

/// Rejects manual spectrum selection unless the service framing allows
/// arbitrary framing. Absence of a selection is always valid.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatValidator;

impl FormatValidator {
    pub fn validate(
        service: ServiceKind,
        selection: Option<&SpectrumSelection>,
    ) -> Result<(), UnsupportedCustomSpectrumError> {
        match selection {
            None => Ok(()),
            Some(_) if service.allows_custom_spectrum() => Ok(()),
            Some(_) => Err(UnsupportedCustomSpectrumError::new(service)),
        }
    }
}

/// Validates a whole request, A-end first, stopping at the first failure.
#[derive(Debug, Clone, Copy)]
pub struct RequestValidator<'g> {
    slots: SlotValidator<'g>,
}

impl<'g> RequestValidator<'g> {
    pub fn new(grid: &'g FrequencyGrid) -> Self {
        Self {
            slots: SlotValidator::new(grid),
        }
    }

    pub fn validate(&self, request: &PathRequest) -> Result<(), RequestValidationError> {
        let ends = [
            (ServiceEnd::AEnd, request.a_end()),
            (ServiceEnd::ZEnd, request.z_end()),
        ];
        for (end, endpoint) in ends {
            FormatValidator::validate(request.service(), endpoint.spectrum())
                .map_err(|e| RequestValidationError::new(end, e.into()))?;
            if let Some(selection) = endpoint.spectrum() {
                self.slots
                    .validate_slot(selection)
                    .map_err(|e| RequestValidationError::new(end, e.into()))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Endpoint;
    use crate::topology::node::NodeIdentifier;

    fn nid(name: &str) -> NodeIdentifier {
        NodeIdentifier::new(name.to_string())
    }

    fn validator(grid: &FrequencyGrid) -> SlotValidator<'_> {
        SlotValidator::new(grid)
    }

    #[test]
    fn test_center_on_grid() {
        let grid = FrequencyGrid::flex_c_band();
        let v = validator(&grid);
        // Anchor itself and anchor +/- whole steps are valid.
        assert!(v
            .validate_center_frequency(Frequency::from_thz(193.1))
            .is_ok());
        assert!(v
            .validate_center_frequency(Frequency::from_thz(193.10625))
            .is_ok());
        assert!(v
            .validate_center_frequency(Frequency::from_thz(191.33125))
            .is_ok());
    }

    #[test]
    fn test_center_off_grid() {
        let grid = FrequencyGrid::flex_c_band();
        let v = validator(&grid);
        let err = v
            .validate_center_frequency(Frequency::from_thz(193.103))
            .unwrap_err();
        assert!(matches!(err, SlotValidationError::OffGridCenter(_)));
    }

    #[test]
    fn test_center_out_of_band() {
        let grid = FrequencyGrid::flex_c_band();
        let v = validator(&grid);
        // 198.1 is a whole number of 6.25 GHz steps above the anchor but
        // beyond the upper edge.
        let err = v
            .validate_center_frequency(Frequency::from_thz(198.1))
            .unwrap_err();
        assert!(matches!(err, SlotValidationError::CenterOutOfBand(_)));
    }

    #[test]
    fn test_slot_width() {
        let grid = FrequencyGrid::flex_c_band();
        let v = validator(&grid);
        assert!(v.validate_slot_width(FrequencyDelta::from_ghz(50.0)).is_ok());
        assert!(v.validate_slot_width(FrequencyDelta::from_ghz(87.5)).is_ok());
        assert!(v.validate_slot_width(FrequencyDelta::from_ghz(30.0)).is_err());
        assert!(v.validate_slot_width(FrequencyDelta::from_ghz(0.0)).is_err());
        assert!(v.validate_slot_width(FrequencyDelta::from_ghz(-12.5)).is_err());
    }

    #[test]
    fn test_slot_near_band_edge() {
        let grid = FrequencyGrid::flex_c_band();
        let v = validator(&grid);
        // Center sits on the grid close to the lower edge, but half the
        // width sticks out of the band.
        let tight = SpectrumSelection::from_thz_ghz(191.33125, 50.0);
        let err = v.validate_slot(&tight).unwrap_err();
        assert!(matches!(err, SlotValidationError::SlotExceedsBand(_)));

        let fitting = SpectrumSelection::from_thz_ghz(193.1, 50.0);
        assert!(v.validate_slot(&fitting).is_ok());
    }

    #[test]
    fn test_format_validator() {
        let sel = SpectrumSelection::from_thz_ghz(193.1, 50.0);
        assert!(FormatValidator::validate(ServiceKind::HundredGigE, None).is_ok());
        assert!(FormatValidator::validate(ServiceKind::Other, Some(&sel)).is_ok());
        assert!(FormatValidator::validate(ServiceKind::HundredGigE, Some(&sel)).is_err());
    }

    #[test]
    fn test_request_validator_reports_failing_end() {
        let grid = FrequencyGrid::flex_c_band();
        let v = RequestValidator::new(&grid);

        let ok = PathRequest::builder(
            Endpoint::new(nid("A")),
            Endpoint::new(nid("Z")),
            ServiceKind::HundredGigE,
        )
        .build();
        assert!(v.validate(&ok).is_ok());

        let bad_z = PathRequest::builder(
            Endpoint::new(nid("A")),
            Endpoint::new(nid("Z")).with_spectrum(SpectrumSelection::from_thz_ghz(193.103, 50.0)),
            ServiceKind::Other,
        )
        .build();
        let err = v.validate(&bad_z).unwrap_err();
        assert_eq!(err.end(), ServiceEnd::ZEnd);

        // A-end failures win over Z-end failures.
        let bad_both = PathRequest::builder(
            Endpoint::new(nid("A")).with_spectrum(SpectrumSelection::from_thz_ghz(100.0, 50.0)),
            Endpoint::new(nid("Z")).with_spectrum(SpectrumSelection::from_thz_ghz(193.103, 50.0)),
            ServiceKind::Other,
        )
        .build();
        let err = v.validate(&bad_both).unwrap_err();
        assert_eq!(err.end(), ServiceEnd::AEnd);
    }
}
