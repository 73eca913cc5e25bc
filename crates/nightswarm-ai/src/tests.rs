#[cfg(test)]
mod tests {
    use nightswarm_core::enums::EnemyCategory;
    use nightswarm_core::types::Vec2;

    use crate::decide::{evaluate, evaluate_offscreen, EnemyContext};
    use crate::profiles::get_profile;

    fn make_context(category: EnemyCategory, distance: f32) -> EnemyContext {
        // Enemy at (distance, 0) with the player at the origin.
        EnemyContext {
            category,
            position: Vec2::new(distance, 0.0),
            player: Vec2::new(0.0, 0.0),
            move_speed: 150.0,
            stagger_remaining_secs: 0.0,
            fire_cooldown_secs: 0.0,
        }
    }

    #[test]
    fn test_melee_chases_toward_player() {
        let ctx = make_context(EnemyCategory::Basic, 300.0);
        let decision = evaluate(&ctx);
        assert!(decision.velocity.x < 0.0, "should move toward the player");
        assert!((decision.velocity.length() - 150.0).abs() < 1e-3);
        assert!(!decision.fire);
    }

    #[test]
    fn test_melee_stops_inside_deadband() {
        let profile = get_profile(EnemyCategory::Basic);
        let ctx = make_context(EnemyCategory::Basic, profile.min_distance - 5.0);
        let decision = evaluate(&ctx);
        assert_eq!(decision.velocity, Vec2::default());
    }

    #[test]
    fn test_melee_idles_beyond_chase_range() {
        let profile = get_profile(EnemyCategory::Basic);
        let ctx = make_context(EnemyCategory::Basic, profile.chase_range + 50.0);
        let decision = evaluate(&ctx);
        assert_eq!(decision.velocity, Vec2::default());
    }

    #[test]
    fn test_stagger_blocks_movement_and_fire() {
        let mut ctx = make_context(EnemyCategory::Shooter, 300.0);
        ctx.stagger_remaining_secs = 0.2;
        let decision = evaluate(&ctx);
        assert_eq!(decision.velocity, Vec2::default());
        assert!(!decision.fire);
    }

    #[test]
    fn test_shooter_holds_at_standoff() {
        let profile = get_profile(EnemyCategory::Shooter);
        let standoff = profile.standoff_range.unwrap();

        // Inside the standoff band: hold, fire.
        let ctx = make_context(EnemyCategory::Shooter, standoff - 20.0);
        let decision = evaluate(&ctx);
        assert_eq!(decision.velocity, Vec2::default());
        assert!(decision.fire);

        // Outside the band but within chase range: close in.
        let ctx = make_context(EnemyCategory::Shooter, standoff + 100.0);
        let decision = evaluate(&ctx);
        assert!(decision.velocity.x < 0.0);
    }

    #[test]
    fn test_shooter_respects_cooldown_and_range() {
        let mut ctx = make_context(EnemyCategory::Shooter, 200.0);
        ctx.fire_cooldown_secs = 0.8;
        assert!(!evaluate(&ctx).fire, "cooldown still running");

        let profile = get_profile(EnemyCategory::Shooter);
        let ctx = make_context(EnemyCategory::Shooter, profile.fire_range + 50.0);
        assert!(!evaluate(&ctx).fire, "target out of fire range");
    }

    #[test]
    fn test_offscreen_path_chases_without_firing() {
        // Off-screen distance, far beyond the on-screen chase range.
        let ctx = make_context(EnemyCategory::Basic, 1100.0);
        let decision = evaluate_offscreen(&ctx);
        assert!(decision.velocity.x < 0.0, "stragglers keep closing in");
        assert!(!decision.fire);
    }

    #[test]
    fn test_offscreen_capability_flags() {
        assert!(get_profile(EnemyCategory::Basic).offscreen_update);
        assert!(get_profile(EnemyCategory::Advanced).offscreen_update);
        assert!(get_profile(EnemyCategory::Epic).offscreen_update);
        assert!(!get_profile(EnemyCategory::Shooter).offscreen_update);
    }
}
