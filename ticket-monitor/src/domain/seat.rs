//! Seat classes and their availability tokens.

use std::fmt;

/// The eleven seat classes reported by the left-ticket feed.
///
/// Each class occupies a fixed column in the raw record (see
/// [`SeatClass::field_index`]). The enum order is the canonical report
/// order, premium first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatClass {
    /// 商务座 — business class (also covers 特等座 premier class).
    Business,
    /// 一等座 — first class.
    FirstClass,
    /// 二等座 — second class.
    SecondClass,
    /// 高级软卧 — deluxe soft sleeper.
    PremiumSoftSleeper,
    /// 软卧 — soft sleeper.
    SoftSleeper,
    /// 动卧 — sleeper berth on high-speed EMU services.
    EmuSleeper,
    /// 硬卧 — hard sleeper.
    HardSleeper,
    /// 软座 — soft seat.
    SoftSeat,
    /// 硬座 — hard seat.
    HardSeat,
    /// 无座 — standing-room ticket.
    NoSeat,
    /// 其他 — anything the feed does not classify.
    Other,
}

impl SeatClass {
    /// All classes, in canonical report order.
    pub const ALL: [SeatClass; 11] = [
        SeatClass::Business,
        SeatClass::FirstClass,
        SeatClass::SecondClass,
        SeatClass::PremiumSoftSleeper,
        SeatClass::SoftSleeper,
        SeatClass::EmuSleeper,
        SeatClass::HardSleeper,
        SeatClass::SoftSeat,
        SeatClass::HardSeat,
        SeatClass::NoSeat,
        SeatClass::Other,
    ];

    /// The Chinese display label, as used in config files and reports.
    pub fn label(&self) -> &'static str {
        match self {
            SeatClass::Business => "商务座",
            SeatClass::FirstClass => "一等座",
            SeatClass::SecondClass => "二等座",
            SeatClass::PremiumSoftSleeper => "高级软卧",
            SeatClass::SoftSleeper => "软卧",
            SeatClass::EmuSleeper => "动卧",
            SeatClass::HardSleeper => "硬卧",
            SeatClass::SoftSeat => "软座",
            SeatClass::HardSeat => "硬座",
            SeatClass::NoSeat => "无座",
            SeatClass::Other => "其他",
        }
    }

    /// Parse a class from its display label.
    pub fn parse(label: &str) -> Option<SeatClass> {
        SeatClass::ALL.iter().copied().find(|c| c.label() == label)
    }

    /// Column of this class's availability token in a raw record,
    /// counting `|`-separated fields from 0.
    ///
    /// Column 26 is read as 无座; some feed revisions reuse it for 硬卧,
    /// which stays mapped at 28 here.
    pub fn field_index(&self) -> usize {
        match self {
            SeatClass::Business => 32,
            SeatClass::FirstClass => 31,
            SeatClass::SecondClass => 30,
            SeatClass::PremiumSoftSleeper => 21,
            SeatClass::SoftSleeper => 23,
            SeatClass::EmuSleeper => 33,
            SeatClass::HardSleeper => 28,
            SeatClass::SoftSeat => 20,
            SeatClass::HardSeat => 29,
            SeatClass::NoSeat => 26,
            SeatClass::Other => 22,
        }
    }
}

impl fmt::Display for SeatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One seat class's availability token, classified by shape.
///
/// The raw field is either empty (the class does not exist on this train),
/// the literal "无" (sold out), a decimal seat count, or a coarse capacity
/// code such as "有".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    /// Empty field: the class is not offered on this train.
    NotOffered,
    /// The literal "无": offered but sold out.
    SoldOut,
    /// Exact remaining-seat count.
    Count(u32),
    /// Coarse capacity code, e.g. "有" (plenty) or "*" (not yet on sale).
    Code(String),
}

impl Availability {
    /// Classify a raw token. Never fails: unrecognised shapes land in
    /// [`Availability::Code`].
    pub fn parse(token: &str) -> Self {
        match token {
            "" => Availability::NotOffered,
            "无" => Availability::SoldOut,
            t => match t.parse::<u32>() {
                Ok(n) => Availability::Count(n),
                Err(_) => Availability::Code(t.to_string()),
            },
        }
    }

    /// Whether tickets can be bought right now.
    ///
    /// Counts and capacity codes are treated alike: anything other than an
    /// empty token or "无" counts as available.
    pub fn has_tickets(&self) -> bool {
        matches!(self, Availability::Count(_) | Availability::Code(_))
    }
}
