//! Brazilian federative units accepted as a city's `state`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum State {
    Ac,
    Al,
    Ap,
    Am,
    Ba,
    Ce,
    Df,
    Es,
    Go,
    Ma,
    Mt,
    Ms,
    Mg,
    Pa,
    Pb,
    Pr,
    Pe,
    Pi,
    Rj,
    Rn,
    Rs,
    Ro,
    Rr,
    Sc,
    Sp,
    Se,
    To,
}

impl State {
    pub const ALL: [State; 27] = [
        State::Ac,
        State::Al,
        State::Ap,
        State::Am,
        State::Ba,
        State::Ce,
        State::Df,
        State::Es,
        State::Go,
        State::Ma,
        State::Mt,
        State::Ms,
        State::Mg,
        State::Pa,
        State::Pb,
        State::Pr,
        State::Pe,
        State::Pi,
        State::Rj,
        State::Rn,
        State::Rs,
        State::Ro,
        State::Rr,
        State::Sc,
        State::Sp,
        State::Se,
        State::To,
    ];

    /// Two-letter code as stored and sent on the wire.
    pub fn code(self) -> &'static str {
        match self {
            State::Ac => "AC",
            State::Al => "AL",
            State::Ap => "AP",
            State::Am => "AM",
            State::Ba => "BA",
            State::Ce => "CE",
            State::Df => "DF",
            State::Es => "ES",
            State::Go => "GO",
            State::Ma => "MA",
            State::Mt => "MT",
            State::Ms => "MS",
            State::Mg => "MG",
            State::Pa => "PA",
            State::Pb => "PB",
            State::Pr => "PR",
            State::Pe => "PE",
            State::Pi => "PI",
            State::Rj => "RJ",
            State::Rn => "RN",
            State::Rs => "RS",
            State::Ro => "RO",
            State::Rr => "RR",
            State::Sc => "SC",
            State::Sp => "SP",
            State::Se => "SE",
            State::To => "TO",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown state code: {0}")]
pub struct UnknownState(pub String);

impl FromStr for State {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        State::ALL
            .iter()
            .copied()
            .find(|state| state.code() == s)
            .ok_or_else(|| UnknownState(s.to_string()))
    }
}
