//! Page access restrictions.
//!
//! A page declares which session states may not view it. The flags are
//! independent and combine with `|`; `NEVER` is the empty set.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AuthRestrict {
    logged_out: bool,
    logged_in: bool,
    not_admin: bool,
}

impl AuthRestrict {
    /// No restriction.
    pub const NEVER: Self = Self {
        logged_out: false,
        logged_in: false,
        not_admin: false,
    };
    /// Anonymous visitors are sent to the login page.
    pub const LOGGED_OUT: Self = Self {
        logged_out: true,
        ..Self::NEVER
    };
    /// Signed-in users are sent home.
    pub const LOGGED_IN: Self = Self {
        logged_in: true,
        ..Self::NEVER
    };
    /// Signed-in users without the admin role are sent home.
    pub const NOT_ADMIN: Self = Self {
        not_admin: true,
        ..Self::NEVER
    };

    pub const fn union(self, other: Self) -> Self {
        Self {
            logged_out: self.logged_out || other.logged_out,
            logged_in: self.logged_in || other.logged_in,
            not_admin: self.not_admin || other.not_admin,
        }
    }

    pub const fn is_never(self) -> bool {
        !(self.logged_out || self.logged_in || self.not_admin)
    }

    pub const fn forbids_logged_out(self) -> bool {
        self.logged_out
    }

    pub const fn forbids_logged_in(self) -> bool {
        self.logged_in
    }

    pub const fn forbids_not_admin(self) -> bool {
        self.not_admin
    }
}

impl BitOr for AuthRestrict {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for AuthRestrict {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Display for AuthRestrict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_never() {
            return f.write_str("NEVER");
        }

        let names = [
            (self.logged_out, "LOGGED_OUT"),
            (self.logged_in, "LOGGED_IN"),
            (self.not_admin, "NOT_ADMIN"),
        ];
        let set: Vec<&str> = names
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&set.join(" | "))
    }
}
