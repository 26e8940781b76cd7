//! # Contract Tier Tests (T0-T3)
//!
//! If ANY tier fails, the value layer is INVALID.
//!
//! ## Tiers
//! - T0: Label identity
//! - T1: Namespace derivation
//! - T2: Proposal validation
//! - T3: Sub-model composition

use pgm_core::{
    LabelIndex, PgmError, ProposalDistribution, ProposalKind, ProposalParameters, VertexLabel,
};

fn label1() -> VertexLabel {
    VertexLabel::new("label1", ["inner", "outer"]).expect("label1")
}

// =============================================================================
// TIER T0: LABEL IDENTITY
// =============================================================================

mod t0_label_identity {
    use super::*;
    use std::collections::HashSet;

    /// T0.1: Labels built from the same parts are equal.
    #[test]
    fn clone_equality() {
        let clone = VertexLabel::new("label1", ["inner", "outer"]).expect("clone");
        assert_eq!(label1(), clone);
    }

    /// T0.2: A different name breaks equality.
    #[test]
    fn different_name_inequality() {
        let label2 = VertexLabel::new("label2", ["inner", "outer"]).expect("label2");
        assert_ne!(label1(), label2);
    }

    /// T0.3: Equal labels hash identically.
    #[test]
    fn hashing_is_structural() {
        let mut set = HashSet::new();
        set.insert(label1());
        set.insert(VertexLabel::new("label1", ["inner", "outer"]).expect("clone"));
        set.insert(VertexLabel::new("label1", ["outer", "inner"]).expect("reordered"));
        assert_eq!(set.len(), 2);
    }

    /// T0.4: Bare string comparison looks at the unqualified name only.
    #[test]
    fn bare_string_comparison() {
        assert!(label1().has_unqualified_name("label1"));
        assert!(!label1().has_unqualified_name("label2"));
    }

    /// T0.5: Empty names are refused.
    #[test]
    fn empty_name_refused() {
        assert!(matches!(
            VertexLabel::global(""),
            Err(PgmError::InvalidArgument(_))
        ));
    }
}

// =============================================================================
// TIER T1: NAMESPACE DERIVATION
// =============================================================================

mod t1_namespace_derivation {
    use super::*;

    /// T1.1: Namespace membership is ordered.
    #[test]
    fn membership_is_ordered() {
        assert!(label1().is_in_namespace(&["inner", "outer"]));
        assert!(!label1().is_in_namespace(&["outer", "inner"]));
    }

    /// T1.2: An extra namespace becomes the outermost scope.
    #[test]
    fn extra_namespace() {
        let expected =
            VertexLabel::new("label1", ["inner", "outer", "top_level"]).expect("expected");
        assert_eq!(label1().with_extra_namespace("top_level"), expected);
    }

    /// T1.3: Stripping removes the outermost scope.
    #[test]
    fn strip_outer_namespace() {
        let expected = VertexLabel::new("label1", ["inner"]).expect("expected");
        assert_eq!(label1().without_outer_namespace().expect("strip"), expected);
    }

    /// T1.4: The outer namespace is the last stored level.
    #[test]
    fn outer_namespace() {
        assert_eq!(label1().outer_namespace().expect("outer"), "outer");
    }

    /// T1.5: Names render outermost first.
    #[test]
    fn qualified_and_unqualified_names() {
        assert_eq!(label1().unqualified_name(), "label1");
        assert_eq!(label1().qualified_name(), "outer.inner.label1");
    }

    /// T1.6: Global labels refuse namespace queries and stripping.
    #[test]
    fn global_label_has_no_outer_scope() {
        let global = VertexLabel::global("x").expect("global");
        assert!(matches!(
            global.outer_namespace(),
            Err(PgmError::EmptyNamespace(_))
        ));
        assert!(matches!(
            global.without_outer_namespace(),
            Err(PgmError::EmptyNamespace(_))
        ));
    }

    /// T1.7: Derivation never mutates the source label.
    #[test]
    fn derivation_leaves_source_untouched() {
        let original = label1();
        let _ = original.with_extra_namespace("top");
        let _ = original.without_outer_namespace();
        assert_eq!(original, label1());
    }
}

// =============================================================================
// TIER T2: PROPOSAL VALIDATION
// =============================================================================

mod t2_proposal_validation {
    use super::*;

    fn sigma(value: f64) -> ProposalParameters {
        ProposalParameters::new().with("sigma", value)
    }

    /// T2.1: Prior without parameters.
    #[test]
    fn prior() {
        let proposal =
            ProposalDistribution::create("prior", &ProposalParameters::new()).expect("prior");
        assert_eq!(proposal.kind(), ProposalKind::Prior);
    }

    /// T2.2: Gaussian with sigma.
    #[test]
    fn gaussian() {
        let proposal = ProposalDistribution::create("gaussian", &sigma(1.0)).expect("gaussian");
        assert_eq!(proposal.kind(), ProposalKind::Gaussian);
        assert_eq!(proposal.sigma(), Some(1.0));
    }

    /// T2.3: Gaussian without sigma.
    #[test]
    fn gaussian_requires_sigma() {
        let err = ProposalDistribution::create("gaussian", &ProposalParameters::new())
            .expect_err("missing sigma");
        assert!(matches!(err, PgmError::MissingRequiredParameter { .. }));
        assert_eq!(
            err.to_string(),
            "Gaussian Proposal Distribution requires a value for sigma"
        );
    }

    /// T2.4: Prior with sigma.
    #[test]
    fn prior_forbids_sigma() {
        let err = ProposalDistribution::create("prior", &sigma(1.0)).expect_err("forbidden");
        assert!(matches!(err, PgmError::ParameterNotApplicable { .. }));
        assert_eq!(
            err.to_string(),
            r#"Parameter sigma is not valid unless type is "gaussian""#
        );
    }

    /// T2.5: Unknown tag.
    #[test]
    fn unknown_tag() {
        let err = ProposalDistribution::create("foo", &ProposalParameters::new())
            .expect_err("unknown");
        assert!(matches!(err, PgmError::UnrecognizedKind(_)));
        assert_eq!(err.to_string(), "Unknown Proposal Distribution type foo");
    }
}

// =============================================================================
// TIER T3: SUB-MODEL COMPOSITION
// =============================================================================

mod t3_composition {
    use super::*;

    fn coin_model() -> LabelIndex {
        LabelIndex::from_labels([
            VertexLabel::global("bias").expect("bias"),
            VertexLabel::global("flip").expect("flip"),
        ])
        .expect("coin")
    }

    /// T3.1: Two copies of a sub-model live side by side once nested.
    #[test]
    fn nested_copies_do_not_collide() {
        let mut world = LabelIndex::new();
        world.merge(&coin_model().nested("coin_a")).expect("a");
        world.merge(&coin_model().nested("coin_b")).expect("b");

        assert_eq!(world.len(), 4);
        assert_eq!(world.in_namespace(&["coin_a"]).len(), 2);
        assert!(world.get_by_qualified_name("coin_b.flip").is_some());
    }

    /// T3.2: Merging without nesting collides.
    #[test]
    fn unnested_copies_collide() {
        let mut world = coin_model();
        let err = world.merge(&coin_model()).expect_err("collision");
        assert_eq!(err, PgmError::DuplicateLabel("bias".to_string()));
    }

    /// T3.3: Labels survive a snapshot roundtrip.
    #[test]
    fn snapshot_roundtrip() {
        let world = coin_model().nested("coin_a");
        let bytes = pgm_core::index_to_bytes(&world).expect("encode");
        let restored = pgm_core::index_from_bytes(&bytes).expect("decode");
        assert_eq!(restored, world);
    }
}
