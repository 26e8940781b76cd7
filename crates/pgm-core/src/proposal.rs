//! # Proposal Configuration
//!
//! Selects and parametrizes the proposal mechanism of a Metropolis-Hastings
//! step. The stochastic perturbation itself is performed by the external
//! engine; this module only decides *which* mechanism and with *what*
//! spread.
//!
//! ## Construction
//!
//! A tag plus named parameters is validated in one step with three
//! terminal outcomes:
//!
//! | Tag | `sigma` | Outcome |
//! |-----|---------|---------|
//! | `prior` | absent | `Prior` |
//! | `prior` | present | `ParameterNotApplicable` |
//! | `gaussian` | present | `Gaussian { sigma }` |
//! | `gaussian` | absent | `MissingRequiredParameter` |
//! | other | any | `UnrecognizedKind` |
//!
//! No partially constructed value is ever observable.
//!
//! ## Wire form
//!
//! `{ "type": "gaussian", "sigma": 0.5 }`. Decoding goes through `create`, so
//! unknown keys are reported as unknown parameters. Only finite `sigma`
//! values are written or read.

use crate::primitives::{GAUSSIAN_TAG, PRIOR_TAG, SIGMA_PARAMETER};
use crate::{PgmError, Result};
use serde::{Deserialize, Serialize, Serializer, ser};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// PROPOSAL KIND
// =============================================================================

/// The closed set of proposal mechanisms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProposalKind {
    /// Draw the candidate from the vertex's prior.
    Prior,
    /// Perturb the current value with a symmetric Gaussian.
    Gaussian,
}

impl ProposalKind {
    /// The tag used to select this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalKind::Prior => PRIOR_TAG,
            ProposalKind::Gaussian => GAUSSIAN_TAG,
        }
    }

    /// Capitalised name used in validation messages.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            ProposalKind::Prior => "Prior",
            ProposalKind::Gaussian => "Gaussian",
        }
    }
}

impl fmt::Display for ProposalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProposalKind {
    type Err = PgmError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            PRIOR_TAG => Ok(ProposalKind::Prior),
            GAUSSIAN_TAG => Ok(ProposalKind::Gaussian),
            other => Err(PgmError::UnrecognizedKind(other.to_string())),
        }
    }
}

// =============================================================================
// PROPOSAL PARAMETERS
// =============================================================================

/// Named numeric parameters supplied alongside a proposal tag.
///
/// Uses `BTreeMap` so that the first unknown parameter reported is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProposalParameters {
    values: BTreeMap<String, f64>,
}

impl ProposalParameters {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a parameter.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Look up a parameter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// The `sigma` parameter, if supplied.
    #[must_use]
    pub fn sigma(&self) -> Option<f64> {
        self.get(SIGMA_PARAMETER)
    }

    /// Parameter names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ProposalParameters {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

// =============================================================================
// PROPOSAL DISTRIBUTION
// =============================================================================

/// A validated proposal configuration.
///
/// Once constructed, the variant and its parameters are fixed; invalid
/// combinations are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawProposal")]
pub enum ProposalDistribution {
    /// Propose from the prior. Takes no parameters.
    Prior,
    /// Propose a symmetric Gaussian step with the given spread.
    Gaussian { sigma: f64 },
}

impl ProposalDistribution {
    /// Validate a tag and its parameters.
    ///
    /// The tag is checked first, then parameter names, then the per-kind
    /// `sigma` rule.
    pub fn create(tag: &str, parameters: &ProposalParameters) -> Result<Self> {
        let kind: ProposalKind = tag.parse()?;

        if let Some(unknown) = parameters.names().find(|name| *name != SIGMA_PARAMETER) {
            return Err(PgmError::UnrecognizedParameter(unknown.to_string()));
        }

        match (kind, parameters.sigma()) {
            (ProposalKind::Prior, None) => Ok(Self::Prior),
            (ProposalKind::Prior, Some(_)) => Err(PgmError::ParameterNotApplicable {
                parameter: SIGMA_PARAMETER.to_string(),
                required_kind: ProposalKind::Gaussian.as_str().to_string(),
            }),
            (ProposalKind::Gaussian, Some(sigma)) => Ok(Self::Gaussian { sigma }),
            (ProposalKind::Gaussian, None) => Err(PgmError::MissingRequiredParameter {
                kind: ProposalKind::Gaussian.display_name().to_string(),
                parameter: SIGMA_PARAMETER.to_string(),
            }),
        }
    }

    /// Propose from the prior.
    #[must_use]
    pub const fn prior() -> Self {
        Self::Prior
    }

    /// Propose a Gaussian step with spread `sigma`.
    #[must_use]
    pub const fn gaussian(sigma: f64) -> Self {
        Self::Gaussian { sigma }
    }

    /// Which mechanism this configuration selects.
    #[must_use]
    pub fn kind(&self) -> ProposalKind {
        match self {
            Self::Prior => ProposalKind::Prior,
            Self::Gaussian { .. } => ProposalKind::Gaussian,
        }
    }

    /// The Gaussian spread; `None` for the prior.
    #[must_use]
    pub fn sigma(&self) -> Option<f64> {
        match self {
            Self::Prior => None,
            Self::Gaussian { sigma } => Some(*sigma),
        }
    }
}

impl fmt::Display for ProposalDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prior => write!(f, "{}", ProposalKind::Prior),
            Self::Gaussian { sigma } => write!(f, "{}(sigma={})", ProposalKind::Gaussian, sigma),
        }
    }
}

// =============================================================================
// SERDE SUPPORT
// =============================================================================

/// Wire form `{ "type": "...", "sigma": ... }`; decoded through `create`.
///
/// Every key besides `type` lands in `parameters`, so a misspelt parameter
/// reaches the validator instead of being dropped.
#[derive(Serialize, Deserialize)]
struct RawProposal {
    #[serde(rename = "type")]
    tag: String,
    #[serde(flatten)]
    parameters: BTreeMap<String, f64>,
}

impl TryFrom<RawProposal> for ProposalDistribution {
    type Error = PgmError;

    fn try_from(raw: RawProposal) -> Result<Self> {
        let parameters: ProposalParameters = raw.parameters.into_iter().collect();
        let proposal = Self::create(&raw.tag, &parameters)?;
        ensure_finite_sigma(&proposal)?;
        Ok(proposal)
    }
}

impl From<ProposalDistribution> for RawProposal {
    fn from(proposal: ProposalDistribution) -> Self {
        let mut parameters = BTreeMap::new();
        if let Some(sigma) = proposal.sigma() {
            parameters.insert(SIGMA_PARAMETER.to_string(), sigma);
        }
        Self {
            tag: proposal.kind().as_str().to_string(),
            parameters,
        }
    }
}

// Only finite sigma goes on the wire.
impl Serialize for ProposalDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        ensure_finite_sigma(self).map_err(ser::Error::custom)?;
        RawProposal::from(*self).serialize(serializer)
    }
}

fn ensure_finite_sigma(proposal: &ProposalDistribution) -> Result<()> {
    match proposal.sigma() {
        Some(sigma) if !sigma.is_finite() => Err(PgmError::InvalidArgument(format!(
            "{} must be finite, got {}",
            SIGMA_PARAMETER, sigma
        ))),
        _ => Ok(()),
    }
}

// =============================================================================
// TESTS
// =============================================================================
