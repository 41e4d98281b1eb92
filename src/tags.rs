//! Closed tag sets.
//!
//! A tag set is an enum with unit variants whose labels are the variant names
//! exactly as written. `closed_tags!` generates the enum together with the
//! pieces every lesson needs: the full member list, the label, `Display`, and
//! a `FromStr` impl for labels arriving from outside the type system.
//!
//! ```
//! use exhaustive_cases::closed_tags;
//!
//! closed_tags! {
//!     pub enum Signal { Red, Green }
//! }
//!
//! assert_eq!(Signal::ALL, &[Signal::Red, Signal::Green]);
//! assert_eq!(Signal::Green.label(), "Green");
//! assert_eq!("Red".parse::<Signal>(), Ok(Signal::Red));
//! assert!("red".parse::<Signal>().is_err());
//! ```

/// Declares a closed tag set.
///
/// Parsing compares labels by exact equality. Anything else is an
/// [`UncoveredTagError`](crate::error::UncoveredTagError) carrying the input.
#[macro_export]
macro_rules! closed_tags {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every member of the set, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The label exactly as declared.
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant) ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::UncoveredTagError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|tag| tag.label() == s)
                    .ok_or_else(|| $crate::error::UncoveredTagError::new(s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    closed_tags! {
        enum Weather {
            Sunny,
            /// Attributes on variants are kept.
            Cloudy,
            Rain,
        }
    }

    #[test]
    fn all_lists_members_in_declaration_order() {
        assert_eq!(Weather::ALL, &[Weather::Sunny, Weather::Cloudy, Weather::Rain]);
    }

    #[test]
    fn label_and_display_agree() {
        for &tag in Weather::ALL {
            assert_eq!(tag.to_string(), tag.label());
        }
        assert_eq!(Weather::Rain.label(), "Rain");
    }

    #[test]
    fn every_label_parses_back() {
        for &tag in Weather::ALL {
            assert_eq!(tag.label().parse::<Weather>(), Ok(tag));
        }
    }

    #[test]
    fn parsing_is_exact() {
        for input in ["sunny", "SUNNY", " Sunny", "Sunny ", "", "Snow"] {
            let err = input.parse::<Weather>().unwrap_err();
            assert_eq!(err.value(), input);
        }
    }
}
