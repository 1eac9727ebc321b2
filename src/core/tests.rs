use super::*;

fn complete_check() -> CollaboratorCheck {
    CollaboratorCheck {
        rigid_body: true,
        velocity: true,
        gravity_scale: true,
        collider: true,
        controller_state: true,
        surface_probes: true,
        surface_contact: true,
        recoil_state: true,
        animation_playback: true,
    }
}

#[test]
fn test_complete_player_activates() {
    assert_eq!(complete_check().verify(), Ok(()));
}

#[test]
fn test_missing_physics_body_is_reported() {
    let check = CollaboratorCheck {
        rigid_body: false,
        velocity: false,
        ..complete_check()
    };

    assert_eq!(
        check.verify(),
        Err(ActivationError::MissingCollaborators(vec![
            "RigidBody",
            "LinearVelocity"
        ]))
    );
}

#[test]
fn test_empty_entity_reports_every_collaborator() {
    let Err(ActivationError::MissingCollaborators(missing)) =
        CollaboratorCheck::default().verify()
    else {
        panic!("empty entity should not activate");
    };

    assert_eq!(missing.len(), 9);
    assert!(missing.contains(&"Collider"));
    assert!(missing.contains(&"AnimationPlayback"));
}

#[test]
fn test_activation_error_names_missing_components() {
    let error = ActivationError::MissingCollaborators(vec!["Collider", "GravityScale"]);
    assert_eq!(
        error.to_string(),
        "player is missing required collaborators: Collider, GravityScale"
    );
}
