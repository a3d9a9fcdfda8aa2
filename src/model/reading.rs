/// One of the four content roles a reply fragment can fill, in the order
/// the flow emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Insights,
    Horoscope,
    Recommendations,
    Spiritual,
}

impl Slot {
    pub const ALL: [Slot; 4] = [
        Slot::Insights,
        Slot::Horoscope,
        Slot::Recommendations,
        Slot::Spiritual,
    ];

    /// Heading used by the advisor summary.
    pub fn label(self) -> &'static str {
        match self {
            Slot::Insights => "Insights",
            Slot::Horoscope => "Horoscope",
            Slot::Recommendations => "Personalized Recommendations",
            Slot::Spiritual => "Spiritual Content",
        }
    }

    /// Fixed text shown when the reply did not carry this section at all.
    pub fn fallback(self) -> &'static str {
        match self {
            Slot::Insights => "No insights available.",
            Slot::Horoscope => "No horoscope available.",
            Slot::Recommendations => "No recommendations available.",
            Slot::Spiritual => "No spiritual content available.",
        }
    }

    /// Warning line the advisor summary shows for a blank section.
    pub fn unavailable_notice(self) -> &'static str {
        match self {
            Slot::Insights => "Insights data is not available.",
            Slot::Horoscope => "Horoscope data is not available.",
            Slot::Recommendations => "Recommendations data is not available.",
            Slot::Spiritual => "Spiritual content is not available.",
        }
    }

    fn index(self) -> usize {
        match self {
            Slot::Insights => 0,
            Slot::Horoscope => 1,
            Slot::Recommendations => 2,
            Slot::Spiritual => 3,
        }
    }
}

/// Best-effort result of sectioning one reply. One optional fragment per
/// slot; the upstream flow makes no promise about how many it sends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reading {
    slots: [Option<String>; Slot::ALL.len()],
}

impl Reading {
    pub fn new(slots: [Option<String>; Slot::ALL.len()]) -> Self {
        Self { slots }
    }

    /// The raw fragment for a slot, if the reply carried one.
    pub fn slot(&self, slot: Slot) -> Option<&str> {
        self.slots[slot.index()].as_deref()
    }

    /// What a panel prints for a slot: the fragment when present, the fixed
    /// fallback when the reply ran out of sections.
    pub fn display_text(&self, slot: Slot) -> &str {
        match self.slot(slot) {
            Some(text) => text,
            None => slot.fallback(),
        }
    }

    /// True when the slot would render as nothing. Only a present-but-empty
    /// fragment can do that; fallbacks are never empty.
    pub fn is_blank(&self, slot: Slot) -> bool {
        self.display_text(slot).is_empty()
    }
}
