use fluidart_engine::FluidWorld;

#[test]
fn perf_smoke_step() {
    let mut world = FluidWorld::new(128);
    world.enable_perf_metrics(true);
    for x in (16..112).step_by(8) {
        world.splat(x as f32, 64.0, 4.0, 200.0, 0.0, -20.0);
    }
    world.step(1.0 / 60.0);
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.project_ms() >= 0.0);
    assert_eq!(stats.grid_size(), 128 * 128);
    assert_eq!(stats.non_finite_cells(), 0);
    assert_eq!(world.frame(), 1);
}

#[test]
fn facade_reads_back_every_field() {
    let mut world = FluidWorld::with_dimensions(64, 32);
    world.set_obstacle_circle(32, 16, 3, true);
    world.add_density(10.0, 10.0, 80.0);
    world.step(0.1);

    assert_eq!(world.field_len(), 64 * 32);
    assert_eq!(world.field_len_bytes(), 64 * 32 * 4);
    assert!(!world.density_ptr().is_null());
    assert!(!world.vx_ptr().is_null());
    assert!(!world.vy_ptr().is_null());
    assert!(!world.pressure_ptr().is_null());
    assert!(!world.obstacles_ptr().is_null());
    assert_eq!(world.view_ptr(), world.density_ptr());
    assert!(world.obstacle_count() > 0);
    assert!(world.total_density() > 0.0);
}

#[test]
fn facade_accepts_config_and_named_fields() {
    let mut world = FluidWorld::new(16);
    world
        .load_config(r#"{"iter": 12, "dissipation": 0.9}"#.to_string())
        .unwrap();
    assert_eq!(world.iterations(), 12);
    assert!(world.get_config_json().contains("\"dissipation\":0.9"));

    world.load_field("density".to_string(), vec![1.0; 256]).unwrap();
    assert_eq!(world.total_density(), 256.0);
    world.swap_field("density".to_string()).unwrap();
    assert_eq!(world.total_density(), 0.0);
}
