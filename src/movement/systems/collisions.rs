//! Movement domain: ground and wall overlap probes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    ControllerState, GameLayer, InputLocked, Player, SurfaceContact, SurfaceProbes,
};

pub(crate) fn detect_surfaces(
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            &Transform,
            &SurfaceProbes,
            &ControllerState,
            &mut SurfaceContact,
        ),
        (With<Player>, Without<InputLocked>),
    >,
) {
    // Filter to only hit the relevant layer (not enemies, effects, etc.)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);

    for (transform, probes, state, mut contact) in &mut query {
        let origin = transform.translation.truncate();
        let was_grounded = contact.grounded;

        let ground_hits = spatial_query.shape_intersections(
            &Collider::circle(probes.ground_radius),
            probes.ground_point(origin),
            0.0,
            &ground_filter,
        );
        let wall_hits = spatial_query.shape_intersections(
            &Collider::circle(probes.wall_radius),
            probes.wall_point(origin, state.facing),
            0.0,
            &wall_filter,
        );

        contact.grounded = !ground_hits.is_empty();
        contact.walled = !wall_hits.is_empty();

        if contact.grounded && !was_grounded {
            debug!("Landed at {:?}", origin);
        } else if !contact.grounded && was_grounded {
            debug!("Left ground at {:?}", origin);
        }
    }
}
