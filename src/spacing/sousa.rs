//! Sousa spacing method
//!
//! Miguel Sousa's group system: the caller sorts letters into three
//! confidence tiers per case, and each letter's sides inherit the master
//! metric matching their topology class. Tier 1 (relational) trusts the
//! topology on both sides, tier 2 (semi-relational) trusts it except on
//! visual sides, tier 3 (visual) ignores topology entirely. Later tiers win
//! when a letter appears in more than one, and overrides are applied last.

use tracing::debug;

use crate::font::Font;
use crate::geometry::set_side_bearings;
use crate::spacing::settings::SousaSettings;
use crate::spacing::topology::{topology_of, TopologyClass};

/// Tier of a Sousa group, in application order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupTier {
    Relational,
    SemiRelational,
    Visual,
}

/// The per-case scalars every derivation draws from
struct CaseScalars {
    straight: f64,
    round: f64,
    arch: f64,
    visual_default: f64,
}

impl CaseScalars {
    fn lowercase(settings: &SousaSettings) -> Self {
        let straight = settings.masters.low_n.left;
        let round = settings.masters.low_o.left;
        Self {
            straight,
            round,
            arch: settings.masters.low_n.right,
            visual_default: ((straight + round) / 2.0).round(),
        }
    }

    /// Uppercase has no distinct arch master; arch reads as straight.
    fn uppercase(settings: &SousaSettings) -> Self {
        let straight = settings.masters.cap_h.left;
        let round = settings.masters.cap_o.left;
        Self {
            straight,
            round,
            arch: straight,
            visual_default: ((straight + round) / 2.0).round(),
        }
    }

    fn value_for(&self, class: TopologyClass) -> f64 {
        match class {
            TopologyClass::Stem => self.straight,
            TopologyClass::Round => self.round,
            TopologyClass::Arch => self.arch,
            TopologyClass::Visual => self.visual_default,
        }
    }

    /// Derive one side for a tier: relational and semi-relational both read
    /// the topology scalar (a visual side resolves to the visual default in
    /// either), the visual tier forces the default unconditionally.
    fn side_value(&self, tier: GroupTier, class: TopologyClass) -> f64 {
        match tier {
            GroupTier::Relational => self.value_for(class),
            GroupTier::SemiRelational => {
                if class != TopologyClass::Visual {
                    self.value_for(class)
                } else {
                    self.visual_default
                }
            }
            GroupTier::Visual => self.visual_default,
        }
    }
}

/// Apply the Sousa method to the font.
///
/// The four masters take their settings values first, then each group is
/// processed in tier order (lowercase, then uppercase), then the override
/// map is applied to every character it names, grouped or not. Characters
/// without a glyph are skipped.
pub fn apply_sousa_method(font: &mut Font, settings: &SousaSettings) {
    let m = &settings.masters;
    apply(font, 'n', Some(m.low_n.left), Some(m.low_n.right));
    apply(font, 'o', Some(m.low_o.left), Some(m.low_o.right));
    apply(font, 'H', Some(m.cap_h.left), Some(m.cap_h.right));
    apply(font, 'O', Some(m.cap_o.left), Some(m.cap_o.right));

    let lows = CaseScalars::lowercase(settings);
    let caps = CaseScalars::uppercase(settings);

    let passes: [(&[char], GroupTier, &CaseScalars); 6] = [
        (&settings.groups.group1, GroupTier::Relational, &lows),
        (&settings.groups.group2, GroupTier::SemiRelational, &lows),
        (&settings.groups.group3, GroupTier::Visual, &lows),
        (&settings.groups.upper_group1, GroupTier::Relational, &caps),
        (&settings.groups.upper_group2, GroupTier::SemiRelational, &caps),
        (&settings.groups.upper_group3, GroupTier::Visual, &caps),
    ];

    for (group, tier, scalars) in passes {
        for &ch in group {
            let topo = topology_of(ch);
            let left = scalars.side_value(tier, topo.left);
            let right = scalars.side_value(tier, topo.right);
            apply(font, ch, Some(left), Some(right));
        }
    }

    // overrides reach every listed character, grouped or not
    for (&ch, pair) in &settings.overrides {
        apply(font, ch, pair.left, pair.right);
    }

    debug!("applied Sousa method to {}", font.info.display_name());
}

fn apply(font: &mut Font, ch: char, left: Option<f64>, right: Option<f64>) {
    let Some(glyph) = font.glyph_for_char_mut(ch) else {
        debug!("no glyph for '{}', skipping", ch);
        return;
    };
    set_side_bearings(glyph, left, right);
}
