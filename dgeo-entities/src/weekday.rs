use strum::{Display, EnumIter, EnumString};

/// Day of the week on which zones are serviced.
///
/// The labels are the Spanish day names that dispatchers use
/// in the back office and that are stored with each zone.
/// Parsing also accepts the spelling without accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Weekday {
    #[strum(to_string = "Lunes")]
    Monday,
    #[strum(to_string = "Martes")]
    Tuesday,
    #[strum(to_string = "Miércoles", serialize = "Miercoles")]
    Wednesday,
    #[strum(to_string = "Jueves")]
    Thursday,
    #[strum(to_string = "Viernes")]
    Friday,
    #[strum(to_string = "Sábado", serialize = "Sabado")]
    Saturday,
    #[strum(to_string = "Domingo")]
    Sunday,
}

impl Weekday {
    /// Days since Monday, i.e. 0 = Monday ... 6 = Sunday.
    pub const fn number_from_monday(self) -> u8 {
        match self {
            Self::Monday => 0,
            Self::Tuesday => 1,
            Self::Wednesday => 2,
            Self::Thursday => 3,
            Self::Friday => 4,
            Self::Saturday => 5,
            Self::Sunday => 6,
        }
    }

    pub const fn try_from_number_from_monday(number: u8) -> Option<Self> {
        let day = match number {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            5 => Self::Saturday,
            6 => Self::Sunday,
            _ => return None,
        };
        Some(day)
    }
}

impl From<time::Weekday> for Weekday {
    fn from(from: time::Weekday) -> Self {
        match from {
            time::Weekday::Monday => Self::Monday,
            time::Weekday::Tuesday => Self::Tuesday,
            time::Weekday::Wednesday => Self::Wednesday,
            time::Weekday::Thursday => Self::Thursday,
            time::Weekday::Friday => Self::Friday,
            time::Weekday::Saturday => Self::Saturday,
            time::Weekday::Sunday => Self::Sunday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator as _;

    #[test]
    fn parse_labels() {
        assert_eq!(Ok(Weekday::Monday), "Lunes".parse());
        assert_eq!(Ok(Weekday::Monday), "lunes".parse());
        assert_eq!(Ok(Weekday::Wednesday), "Miércoles".parse());
        assert_eq!(Ok(Weekday::Wednesday), "miercoles".parse());
        assert_eq!(Ok(Weekday::Saturday), "Sábado".parse());
        assert_eq!(Ok(Weekday::Saturday), "SABADO".parse());
        assert!("Monday".parse::<Weekday>().is_err());
    }

    #[test]
    fn display_uses_accented_labels() {
        assert_eq!("Miércoles", Weekday::Wednesday.to_string());
        assert_eq!("Sábado", Weekday::Saturday.to_string());
    }

    #[test]
    fn numbers_from_monday() {
        for (i, day) in Weekday::iter().enumerate() {
            assert_eq!(i as u8, day.number_from_monday());
            assert_eq!(Some(day), Weekday::try_from_number_from_monday(i as u8));
        }
        assert_eq!(None, Weekday::try_from_number_from_monday(7));
    }

    #[test]
    fn from_time_weekday() {
        assert_eq!(Weekday::Sunday, Weekday::from(time::Weekday::Sunday));
        assert_eq!(Weekday::Thursday, Weekday::from(time::Weekday::Thursday));
    }
}
