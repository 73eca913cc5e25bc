//! The simulation engine — the core of the game.
//!
//! `GameEngine` owns the entity pools, the wave controller, the spawn
//! planner state, and the seeded RNG; processes queued commands at tick
//! boundaries; runs all systems in a fixed order; and produces
//! `ArenaSnapshot`s. Completely headless — rendering, input, audio, and
//! persistence are external collaborators driven by snapshots and events.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use nightswarm_core::commands::PlayerCommand;
use nightswarm_core::constants::*;
use nightswarm_core::enums::{DeathCause, EnemyCategory, GamePhase, PickupKind};
use nightswarm_core::events::GameEvent;
use nightswarm_core::state::ArenaSnapshot;
use nightswarm_core::templates::template;
use nightswarm_core::types::{GameTime, SlotId, Vec2, WorldBounds};

use crate::entities::{Enemy, Pickup, Projectile};
use crate::pool::Pool;
use crate::spawn;
use crate::systems;
use crate::systems::behavior::ProjectileRequest;
use crate::wave::WaveController;

/// Configuration for a new engine.
pub struct EngineConfig {
    /// RNG seed for determinism. Same seed + same commands = same run.
    pub seed: u64,
    pub world: WorldBounds,
    pub enemy_capacity: usize,
    pub projectile_capacity: usize,
    pub pickup_capacity: usize,
    /// Session length before the level is cleared (seconds).
    pub session_limit_secs: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            world: WorldBounds::new(WORLD_WIDTH, WORLD_HEIGHT),
            enemy_capacity: ENEMY_POOL_CAPACITY,
            projectile_capacity: PROJECTILE_POOL_CAPACITY,
            pickup_capacity: PICKUP_POOL_CAPACITY,
            session_limit_secs: SESSION_TIME_LIMIT_SECS,
        }
    }
}

/// Running score tracked by the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreState {
    pub kills: u32,
    pub gold: u32,
    pub xp: u32,
}

/// The simulation engine. Owns the pools and all session state.
pub struct GameEngine {
    config: EngineConfig,
    rng: ChaCha8Rng,
    time: GameTime,
    phase: GamePhase,
    player: Vec2,
    enemies: Pool<Enemy>,
    projectiles: Pool<Projectile>,
    pickups: Pool<Pickup>,
    wave: WaveController,
    score: ScoreState,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
    fire_requests: Vec<ProjectileRequest>,
    release_buffer: Vec<SlotId>,
}

impl GameEngine {
    /// Create a new engine with the given config.
    pub fn new(config: EngineConfig) -> Self {
        let player = config.world.center();
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            time: GameTime::default(),
            phase: GamePhase::default(),
            player,
            enemies: Pool::with_capacity(config.enemy_capacity),
            projectiles: Pool::with_capacity(config.projectile_capacity),
            pickups: Pool::with_capacity(config.pickup_capacity),
            wave: WaveController::new(),
            score: ScoreState::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            fire_requests: Vec::new(),
            release_buffer: Vec::new(),
            config,
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the snapshot.
    pub fn tick(&mut self) -> ArenaSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();

            if self.time.elapsed_secs >= self.config.session_limit_secs {
                self.end_run(GamePhase::LevelCleared);
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            self.time,
            self.phase,
            self.player,
            &self.enemies,
            &self.projectiles,
            &self.pickups,
            &self.wave,
            &self.score,
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> GameTime {
        self.time
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn wave(&self) -> &WaveController {
        &self.wave
    }

    /// Read-only access to the enemy pool.
    pub fn enemies(&self) -> &Pool<Enemy> {
        &self.enemies
    }

    pub fn projectiles(&self) -> &Pool<Projectile> {
        &self.projectiles
    }

    pub fn pickups(&self) -> &Pool<Pickup> {
        &self.pickups
    }

    /// Enemies that count for gameplay: pool-active and not dead.
    pub fn live_enemy_count(&self) -> u32 {
        self.enemies
            .iter()
            .filter(|(_, enemy)| enemy.is_live())
            .count() as u32
    }

    fn active_shooter_count(&self) -> u32 {
        self.enemies
            .iter()
            .filter(|(_, enemy)| enemy.is_live() && enemy.category == EnemyCategory::Shooter)
            .count() as u32
    }

    /// Spawn one enemy at an exact location (for tests).
    #[cfg(test)]
    pub fn spawn_enemy_at(&mut self, category: EnemyCategory, position: Vec2) -> Option<SlotId> {
        self.spawn_enemy(category, position, false)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command. Terminal phases make every gameplay
    /// command a no-op — the flag is authoritative and checked first.
    fn handle_command(&mut self, command: PlayerCommand) {
        if self.phase.is_terminal() {
            return;
        }

        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::MainMenu {
                    self.start_session();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::AdvanceWave => {
                if self.phase == GamePhase::Active {
                    self.advance_wave();
                }
            }
            PlayerCommand::SetPlayerPosition { x, y } => {
                self.player = self
                    .config
                    .world
                    .clamp_with_padding(Vec2::new(x, y), 0.0);
            }
            PlayerCommand::DamageEnemy {
                target,
                amount,
                source,
            } => {
                if self.phase == GamePhase::Active {
                    self.apply_damage(target, amount, source);
                }
            }
            PlayerCommand::PlayerDied => {
                if self.phase == GamePhase::Active {
                    self.events.push(GameEvent::PlayerDied);
                    self.end_run(GamePhase::GameOver);
                }
            }
            PlayerCommand::TimeLimitReached => {
                if self.phase == GamePhase::Active {
                    self.end_run(GamePhase::LevelCleared);
                }
            }
        }
    }

    fn start_session(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.time = GameTime::default();
        self.player = self.config.world.center();
        self.enemies = Pool::with_capacity(self.config.enemy_capacity);
        self.projectiles = Pool::with_capacity(self.config.projectile_capacity);
        self.pickups = Pool::with_capacity(self.config.pickup_capacity);
        self.wave = WaveController::new();
        self.score = ScoreState::default();
        self.phase = GamePhase::Active;
        tracing::info!(seed = self.config.seed, "session started");
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Wave timers: spawn cadence and the slow 60-second ramp.
        //    Their relative order within a tick is fixed here, but no
        //    system depends on it.
        let fires = self.wave.tick_timers(DT_MS);
        for _ in 0..fires.ramp {
            self.apply_ramp();
        }
        for _ in 0..fires.spawn {
            self.spawn_wave_batch();
        }

        // 2. Behavior with distance LOD; collects ranged fire requests.
        systems::behavior::run(&mut self.enemies, self.player, DT, &mut self.fire_requests);
        for i in 0..self.fire_requests.len() {
            let request = self.fire_requests[i];
            self.spawn_projectile(request);
        }
        self.fire_requests.clear();

        // 3. Kinematic integration.
        systems::movement::run(
            &mut self.enemies,
            &mut self.projectiles,
            self.config.world,
            DT,
        );

        // 4. Projectile expiry and player contact.
        systems::projectile::run(
            &mut self.projectiles,
            self.player,
            self.config.world,
            DT,
            &mut self.release_buffer,
            &mut self.events,
        );

        // 5. Pickup magnetism and collection.
        systems::pickup::run(
            &mut self.pickups,
            self.player,
            DT,
            &mut self.score,
            &mut self.release_buffer,
            &mut self.events,
        );

        // 6. Death clocks and slot reclamation.
        systems::lifecycle::run(
            &mut self.enemies,
            DT,
            &mut self.release_buffer,
            &mut self.events,
        );

        // 7. Quota exhausted and the field cleared: next wave.
        if !self.wave.has_quota() && self.live_enemy_count() == 0 {
            self.advance_wave();
        }

        // 8. Population floor, once per frame.
        self.enforce_population_floor();
    }

    /// Begin the next wave and spawn its initial burst.
    fn advance_wave(&mut self) {
        let advance = self.wave.advance_wave();
        self.events.push(GameEvent::WaveAdvanced {
            wave_number: advance.wave_number,
            quota: advance.quota,
            spawn_interval_ms: advance.spawn_interval_ms,
        });

        for _ in 0..advance.initial_burst {
            if !self.try_quota_spawn() {
                break;
            }
        }
    }

    /// Apply the slow difficulty ramp.
    fn apply_ramp(&mut self) {
        let (wave_number, max_enemies, spawn_interval_ms) = self.wave.apply_long_run_ramp();
        self.events.push(GameEvent::DifficultyRamped {
            wave_number,
            max_enemies,
            spawn_interval_ms,
        });
    }

    /// One spawn-timer fire: a batch of quota spawns, then the floor
    /// check that also runs inside the timer path.
    fn spawn_wave_batch(&mut self) {
        let count = spawn::spawn_count(self.wave.wave_number());
        for _ in 0..count {
            if !self.try_quota_spawn() {
                break;
            }
        }
        self.enforce_population_floor();
    }

    /// Attempt one quota-consuming spawn. Returns false when the quota
    /// is spent, the ceiling is reached, or the pool is exhausted.
    fn try_quota_spawn(&mut self) -> bool {
        if !self.wave.has_quota() {
            return false;
        }
        if self.live_enemy_count() >= self.wave.max_enemies() {
            return false;
        }
        if self.spawn_planned(false).is_none() {
            return false;
        }
        self.wave.consume_spawn();
        true
    }

    /// Top the population back up whenever it sinks to the threshold.
    /// Needs are recomputed from the live count at call time, so running
    /// this twice in one frame cannot overshoot the floor.
    fn enforce_population_floor(&mut self) {
        let live = self.live_enemy_count();
        if live > FORCE_SPAWN_THRESHOLD {
            return;
        }
        let need = MIN_ENEMIES.saturating_sub(live).min(FORCE_SPAWN_BATCH_MAX);
        for _ in 0..need {
            if self.spawn_planned(true).is_none() {
                break;
            }
        }
    }

    /// Pick a category and position, then spawn. `None` means the pool
    /// was exhausted and the request was dropped.
    fn spawn_planned(&mut self, forced: bool) -> Option<SlotId> {
        let wave_number = self.wave.wave_number();
        let shooters = self.active_shooter_count();
        let category = spawn::pick_category(&mut self.rng, wave_number, shooters);
        let position = spawn::pick_position(&mut self.rng, self.player, wave_number, self.config.world);
        self.spawn_enemy(category, position, forced)
    }

    fn spawn_enemy(
        &mut self,
        category: EnemyCategory,
        position: Vec2,
        forced: bool,
    ) -> Option<SlotId> {
        let scaling = self.wave.effective_scaling();
        let Some((slot, enemy)) = self.enemies.acquire() else {
            tracing::debug!(category = category.name(), "enemy pool exhausted, spawn skipped");
            return None;
        };
        spawn::initialize_enemy(enemy, category, position, &scaling, &mut self.rng);
        self.events.push(GameEvent::EnemySpawned {
            slot,
            category,
            forced,
        });
        Some(slot)
    }

    fn spawn_projectile(&mut self, request: ProjectileRequest) {
        let Some((_slot, projectile)) = self.projectiles.acquire() else {
            tracing::debug!("projectile pool exhausted, shot dropped");
            return;
        };
        projectile.position = request.origin;
        projectile.velocity = request.velocity;
        projectile.damage = request.damage;
        projectile.ttl_secs = PROJECTILE_TTL_SECS;
    }

    /// Apply damage to a pooled enemy. Stale handles and dead targets
    /// are ignored — both are ordinary races with the death teardown.
    fn apply_damage(&mut self, target: SlotId, amount: f32, _source: Option<Vec2>) {
        let Some(enemy) = self.enemies.get_mut(target) else {
            return;
        };
        if enemy.is_dead {
            return;
        }

        let dealt = (amount - enemy.defense).max(MIN_DAMAGE);
        enemy.health -= dealt;

        // Stagger gates movement; a hit landing mid-stagger neither
        // extends nor restarts it.
        if enemy.stagger_remaining_secs <= 0.0 {
            enemy.stagger_remaining_secs = STAGGER_DURATION_SECS;
        }

        if enemy.health > 0.0 {
            return;
        }

        // Death transition: one-way, slot stays active for teardown.
        enemy.is_dead = true;
        enemy.death_cause = Some(DeathCause::Killed);
        enemy.death_elapsed_secs = 0.0;
        let category = enemy.category;
        let position = enemy.position;

        self.score.kills += 1;
        self.events.push(GameEvent::EnemyDied {
            slot: target,
            category,
            cause: DeathCause::Killed,
        });

        self.drop_loot(category, position);
    }

    fn drop_loot(&mut self, category: EnemyCategory, position: Vec2) {
        self.spawn_pickup(PickupKind::XpGem, XP_GEM_VALUE, position);
        if template(category).drops_bonus_loot {
            self.spawn_pickup(PickupKind::Coin, EPIC_COIN_VALUE, position);
        }
    }

    fn spawn_pickup(&mut self, kind: PickupKind, value: u32, position: Vec2) {
        let Some((_slot, pickup)) = self.pickups.acquire() else {
            tracing::debug!(?kind, "pickup pool exhausted, drop skipped");
            return;
        };
        pickup.position = position;
        pickup.kind = kind;
        pickup.value = value;
        pickup.ttl_secs = PICKUP_TTL_SECS;
    }

    /// Terminal transition. Emits the summary the persistence
    /// collaborator consumes, exactly once.
    fn end_run(&mut self, terminal: GamePhase) {
        self.phase = terminal;
        if terminal == GamePhase::LevelCleared {
            self.events.push(GameEvent::LevelCleared);
        }
        self.events.push(GameEvent::RunEnded {
            gold: self.score.gold,
            kills: self.score.kills,
            wave_number: self.wave.wave_number(),
            time_alive_secs: self.time.elapsed_secs,
            time_alive_ms: self.time.elapsed_ms(),
        });
        tracing::info!(
            phase = ?terminal,
            kills = self.score.kills,
            wave = self.wave.wave_number(),
            "run ended"
        );
    }
}
