//! Combat domain: combat systems for attacks, recoil, damage, and cleanup.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::attacks::select_attack;
use crate::combat::components::{Damageable, EffectLifetime, Health, Invincible, RecoilState};
use crate::combat::events::{HitEvent, PlayerDamaged, SlashEffect, TargetDefeated};
use crate::combat::recoil::apply_recoil;
use crate::combat::resources::{AttackTuning, CombatTuning, RecoilTuning};
use crate::combat::strike::{AttackRequest, ScanHit, perform_attack};
use crate::feedback::AudioCue;
use crate::hitstop::{HitStopRequest, HitStopTuning};
use crate::movement::{
    BodyState, ControllerInput, ControllerState, Facing, GameLayer, InputLocked, Player,
    SurfaceContact,
};

pub(crate) fn process_attacks(
    spatial_query: SpatialQuery,
    input: Res<ControllerInput>,
    tuning: Res<AttackTuning>,
    hit_stop_tuning: Res<HitStopTuning>,
    mut hits: MessageWriter<HitEvent>,
    mut effects: MessageWriter<SlashEffect>,
    mut cues: MessageWriter<AudioCue>,
    mut hit_stops: MessageWriter<HitStopRequest>,
    positions: Query<&Transform, With<Damageable>>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &SurfaceContact,
            &mut ControllerState,
            &mut RecoilState,
        ),
        (With<Player>, Without<InputLocked>),
    >,
) {
    if !input.attack_pressed {
        return;
    }

    let vertical = input.vertical();
    let attackable_filter = SpatialQueryFilter::from_mask(GameLayer::Attackable);

    for (entity, transform, contact, mut state, mut recoil) in &mut query {
        // Down attacks are never available on the ground
        let Some(kind) = select_attack(vertical, contact.grounded) else {
            continue;
        };

        let origin = transform.translation.truncate();

        let scan = |center: Vec2, half_extents: Vec2| -> Vec<ScanHit> {
            spatial_query
                .shape_intersections(
                    &Collider::rectangle(half_extents.x * 2.0, half_extents.y * 2.0),
                    center,
                    0.0,
                    &attackable_filter,
                )
                .into_iter()
                .filter_map(|target| {
                    positions.get(target).ok().map(|t| ScanHit {
                        entity: target,
                        position: t.translation.truncate(),
                    })
                })
                .collect()
        };

        let request = AttackRequest {
            source: entity,
            kind,
            origin,
            vertical,
        };
        let report = perform_attack(
            request,
            &tuning,
            hit_stop_tuning.on_hit,
            &mut state,
            &mut recoil,
            &scan,
        );

        for cue in report.cues {
            cues.write(cue);
        }
        effects.write(report.slash);
        for hit in report.hits {
            hits.write(hit);
        }
        if let Some(hit_stop) = report.hit_stop {
            hit_stops.write(hit_stop);
        }

        debug!(
            "Attack {:?}: {} target(s), recoil x={} y={}",
            kind,
            report.outcome.strikes.len(),
            recoil.recoiling_x,
            recoil.recoiling_y
        );
    }
}

pub(crate) fn apply_recoil_velocity(
    tuning: Res<RecoilTuning>,
    mut query: Query<
        (
            &mut RecoilState,
            &ControllerState,
            &SurfaceContact,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        (With<Player>, Without<InputLocked>),
    >,
) {
    for (mut recoil, state, contact, mut velocity, mut gravity) in &mut query {
        let mut body = BodyState {
            velocity: velocity.0,
            gravity_scale: gravity.0,
        };

        let was_recoiling = recoil.is_recoiling();
        apply_recoil(
            &mut recoil,
            &tuning,
            state.facing,
            contact.grounded,
            state.is_dashing(),
            state.baseline_gravity,
            &mut body,
        );
        if was_recoiling && !recoil.is_recoiling() {
            debug!("Recoil cleared");
        }

        velocity.0 = body.velocity;
        gravity.0 = body.gravity_scale;
    }
}

/// Maximum velocity a struck target can have after knockback
const MAX_KNOCKBACK_VELOCITY: f32 = 800.0;

pub(crate) fn apply_hits(
    mut hit_events: MessageReader<HitEvent>,
    mut defeated: MessageWriter<TargetDefeated>,
    mut query: Query<(&mut Health, Option<&mut LinearVelocity>), With<Damageable>>,
) {
    for event in hit_events.read() {
        let Ok((mut health, velocity)) = query.get_mut(event.target) else {
            continue;
        };

        let dealt = health.take_damage(event.damage);
        debug!("{:?} hit {:?} for {}", event.source, event.target, dealt);

        if let Some(mut velocity) = velocity {
            // Targets are pushed away from the attacker
            velocity.0 = (velocity.0 - event.push_direction * event.recoil_strength)
                .clamp_length_max(MAX_KNOCKBACK_VELOCITY);
        }

        if health.is_dead() {
            defeated.write(TargetDefeated {
                entity: event.target,
            });
        }
    }
}

pub(crate) fn process_defeats(
    mut commands: Commands,
    mut defeated: MessageReader<TargetDefeated>,
    query: Query<Entity, With<Damageable>>,
) {
    for event in defeated.read() {
        if let Ok(entity) = query.get(event.entity) {
            info!("Target {:?} defeated", entity);
            commands.entity(entity).despawn();
        }
    }
}

pub(crate) fn handle_player_damaged(
    mut damaged: MessageReader<PlayerDamaged>,
    mut hit_stops: MessageWriter<HitStopRequest>,
    tuning: Res<CombatTuning>,
    hit_stop_tuning: Res<HitStopTuning>,
    mut query: Query<&mut Invincible, With<Player>>,
) {
    for event in damaged.read() {
        let Ok(mut invincible) = query.get_mut(event.player) else {
            continue;
        };
        if invincible.is_active() {
            continue;
        }

        invincible.timer.start(tuning.iframes_duration);
        if let Some(request) = hit_stop_tuning.on_damaged {
            hit_stops.write(request);
        }
        debug!("Player took {} damage", event.amount);
    }
}

pub(crate) fn tick_invincibility(time: Res<Time>, mut query: Query<&mut Invincible>) {
    let dt = time.delta_secs();
    for mut invincible in &mut query {
        invincible.timer.tick(dt);
    }
}

pub(crate) fn spawn_slash_effects(
    mut commands: Commands,
    mut effects: MessageReader<SlashEffect>,
    tuning: Res<CombatTuning>,
    attack_tuning: Res<AttackTuning>,
) {
    for effect in effects.read() {
        let size = attack_tuning.profile(effect.kind).half_extents * 2.0;
        // Side slashes mirror with facing; vertical slashes are rotated instead
        let flip_x = effect.angle_degrees == 0.0 && effect.facing == Facing::Left;

        commands.spawn((
            EffectLifetime(tuning.effect_duration),
            Sprite {
                color: Color::srgba(1.0, 1.0, 1.0, 0.6),
                custom_size: Some(size),
                flip_x,
                ..default()
            },
            Transform::from_xyz(effect.position.x, effect.position.y, 1.0)
                .with_rotation(Quat::from_rotation_z(effect.angle_degrees.to_radians())),
        ));
    }
}

pub(crate) fn cleanup_expired_effects(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut EffectLifetime)>,
) {
    let dt = time.delta_secs();
    for (entity, mut lifetime) in &mut query {
        lifetime.0 -= dt;
        if lifetime.0 <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}
