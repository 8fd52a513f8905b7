//! Headless simulation
//!
//! Drives one on-foot player and one vehicle through the level with scripted
//! inputs at a fixed tick rate.

use sandbox_engine::physics::movement::{
    MoveOutcome, PlayerController, PlayerInput, PlayerState, VehicleController, VehicleInput,
    VehicleState,
};

use crate::config::GameConfig;
use crate::level::{Level, LevelError};

/// Vehicle heading at spawn: facing +Z, toward the jump ramp
const VEHICLE_SPAWN_HEADING: f32 = std::f32::consts::PI;

/// Outcome of one simulation tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Tick index
    pub tick: u32,
    /// Player movement result
    pub player: MoveOutcome,
    /// Vehicle movement result
    pub vehicle: MoveOutcome,
}

/// Totals over a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Ticks simulated
    pub ticks: u32,
    /// Ticks where the player was pushed by something
    pub player_collisions: u32,
    /// Ticks where the vehicle was pushed by something
    pub vehicle_collisions: u32,
    /// Player touchdowns
    pub player_landings: u32,
    /// Vehicle touchdowns
    pub vehicle_landings: u32,
}

/// Level plus the movers running through it
pub struct Simulation {
    level: Level,
    player_controller: PlayerController,
    vehicle_controller: VehicleController,
    tick: u32,

    /// On-foot player
    pub player: PlayerState,
    /// Vehicle
    pub vehicle: VehicleState,
}

impl Simulation {
    /// Build the level and spawn both movers
    pub fn new(config: &GameConfig) -> Result<Self, LevelError> {
        let level = Level::build(config)?;
        let mut player = PlayerState::at(level.player_spawn());
        player.grounded = true;
        let vehicle = VehicleState::parked(level.vehicle_spawn(), VEHICLE_SPAWN_HEADING);

        Ok(Self {
            player_controller: PlayerController::new(config.player.clone()),
            vehicle_controller: VehicleController::new(config.vehicle.clone()),
            level,
            tick: 0,
            player,
            vehicle,
        })
    }

    /// Rebuild the level and put both movers back at their spawns
    pub fn restart(&mut self) -> Result<(), LevelError> {
        self.level.reset()?;
        self.player = PlayerState::at(self.level.player_spawn());
        self.player.grounded = true;
        self.vehicle = VehicleState::parked(self.level.vehicle_spawn(), VEHICLE_SPAWN_HEADING);
        self.tick = 0;
        Ok(())
    }

    /// The level being simulated
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Ticks simulated so far
    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Scripted player: sprint ahead into the funnel, hop every 1.5s, then turn around
    fn player_input(tick: u32) -> PlayerInput {
        let turning = tick.saturating_sub(600) as f32 * 0.005;
        PlayerInput {
            forward: 1.0,
            strafe: if (300..420).contains(&tick) { 0.5 } else { 0.0 },
            yaw: turning,
            jump: tick % 90 == 89,
            sprint: tick < 300,
        }
    }

    /// Scripted vehicle: full throttle over the ramp, a short right turn, then brake
    fn vehicle_input(tick: u32) -> VehicleInput {
        VehicleInput {
            throttle: if tick < 600 { 1.0 } else { 0.0 },
            steer: if (400..480).contains(&tick) { 0.3 } else { 0.0 },
            brake: tick >= 900,
        }
    }

    /// Advance both movers by one tick
    pub fn step(&mut self, delta_time: f32) -> TickReport {
        let providers = self.level.providers();
        let world = self.level.ground_context(&providers);

        let player = self.player_controller.step(
            &mut self.player,
            &Self::player_input(self.tick),
            &world,
            delta_time,
        );
        let vehicle = self.vehicle_controller.step(
            &mut self.vehicle,
            &Self::vehicle_input(self.tick),
            &world,
            delta_time,
        );

        let report = TickReport {
            tick: self.tick,
            player,
            vehicle,
        };
        self.tick += 1;
        report
    }

    /// Run `ticks` ticks, logging a summary every `report_interval`
    pub fn run(&mut self, ticks: u32, delta_time: f32, report_interval: u32) -> RunStats {
        let mut stats = RunStats::default();
        for _ in 0..ticks {
            let report = self.step(delta_time);
            stats.ticks += 1;
            stats.player_collisions += u32::from(report.player.collided);
            stats.vehicle_collisions += u32::from(report.vehicle.collided);
            stats.player_landings += u32::from(report.player.landed);
            stats.vehicle_landings += u32::from(report.vehicle.landed);

            if report_interval > 0 && (report.tick + 1) % report_interval == 0 {
                self.log_state();
            }
        }
        stats
    }

    fn log_state(&self) {
        let p = &self.player;
        let v = &self.vehicle;
        log::info!(
            "[tick {}] player ({:.2}, {:.2}, {:.2}) grounded={} on {:?}",
            self.tick(),
            p.position.x,
            p.position.y,
            p.position.z,
            p.grounded,
            p.ground.map(|g| g.surface),
        );
        log::info!(
            "[tick {}] vehicle ({:.2}, {:.2}, {:.2}) speed={:.2} pitch={:.3} grounded={}",
            self.tick(),
            v.position.x,
            v.position.y,
            v.position.z,
            v.speed,
            v.pitch,
            v.grounded,
        );
    }
}
