use ideal_gas::constants::R;
use ideal_gas::{ContainerRect, GasConfig, GasSimulation, InputEvent, ThermodynamicState};

fn fresh(seed: u64) -> ideal_gas::Result<GasSimulation> {
    GasSimulation::with_seed(GasConfig::default(), seed)
}

fn all_inside(sim: &GasSimulation, area: &ContainerRect) -> bool {
    sim.particles()
        .iter()
        .all(|p| area.contains_circle(p.position, p.radius))
}

/// Every particle stays within the inset container across a long run
/// that sweeps all three sliders.
#[test]
fn particles_stay_inside_across_slider_sweeps() -> ideal_gas::Result<()> {
    let mut sim = fresh(2024)?;
    let cfg = sim.config().clone();

    for frame in 0..1200u32 {
        let phase = frame as f64 / 1200.0;
        match frame % 3 {
            0 => sim.handle(InputEvent::Volume(
                cfg.volume.min + cfg.volume.span() * (1.0 - phase),
            )),
            1 => sim.handle(InputEvent::Temperature(
                cfg.temperature.min + cfg.temperature.span() * phase,
            )),
            _ => sim.handle(InputEvent::Moles(
                cfg.moles.min + cfg.moles.span() * ((phase * 7.0).sin() * 0.5 + 0.5),
            )),
        }

        sim.step(1.0 / 60.0);
        let area = sim.container();
        assert!(
            all_inside(&sim, &area),
            "particle escaped at frame {frame}: {area:?}"
        );
        assert!((5..=250).contains(&sim.particles().len()));
    }
    Ok(())
}

/// Shrinking the container re-seeds stranded particles in the same event,
/// so the next snapshot never shows a particle through a wall.
#[test]
fn shrinking_volume_reseeds_stranded_particles() -> ideal_gas::Result<()> {
    let mut sim = fresh(99)?;
    let cfg = sim.config().clone();

    sim.handle(InputEvent::Volume(cfg.volume.max));
    for _ in 0..240 {
        sim.step(1.0 / 60.0);
    }
    let before: Vec<_> = sim.particles().iter().map(|p| p.position).collect();

    sim.handle(InputEvent::Volume(cfg.volume.min));
    let small = sim.container();
    let stranded: Vec<usize> = before
        .iter()
        .enumerate()
        .filter(|(_, pos)| !small.contains(**pos))
        .map(|(i, _)| i)
        .collect();
    assert!(
        !stranded.is_empty(),
        "a full-size container should leave particles outside the smallest one"
    );

    let frame = sim.frame();
    assert_eq!(frame.container, small);
    assert!(frame
        .particles
        .iter()
        .all(|p| small.contains_circle(p.position, p.radius)));
    for &i in &stranded {
        let p = &sim.particles().as_slice()[i];
        assert_eq!(p.area, small);
        assert_ne!(p.position, before[i]);
    }

    // nothing is left for the next tick to fix
    assert_eq!(sim.step(1.0 / 60.0), 0);
    assert!(all_inside(&sim, &small));
    Ok(())
}

#[test]
fn minimum_moles_gives_floor_count() -> ideal_gas::Result<()> {
    let cfg = GasConfig {
        base_particles: 20.0,
        ..GasConfig::default()
    };
    let mut sim = GasSimulation::with_seed(cfg.clone(), 5)?;
    // 20 * 0.2 = 4, lifted to the floor
    sim.handle(InputEvent::Moles(cfg.moles.min));
    assert_eq!(sim.particles().len(), 5);
    assert_eq!(sim.target_count(), 5);
    Ok(())
}

#[test]
fn default_density_at_minimum_moles_gives_eight() -> ideal_gas::Result<()> {
    let mut sim = fresh(5)?;
    // 40 * 0.2 = 8, already above the floor of 5
    sim.handle(InputEvent::Moles(sim.config().moles.min));
    assert_eq!(sim.target_count(), 8);
    assert_eq!(sim.particles().len(), 8);
    Ok(())
}

#[test]
fn room_conditions_pressure_and_readout() -> ideal_gas::Result<()> {
    let sim = fresh(1)?;
    let expected = 1.0 * R * 300.0 / 0.1;
    assert!((sim.pressure() - expected).abs() < 1e-9);
    assert!((sim.pressure() - 24943.39).abs() < 0.01);
    assert_eq!(sim.readouts().pressure, "2.494e4 Pa");
    Ok(())
}

#[test]
fn pressure_follows_gas_law_over_slider_grid() -> ideal_gas::Result<()> {
    let mut sim = fresh(8)?;
    let cfg = sim.config().clone();
    for i in 0..=4 {
        for j in 0..=4 {
            for k in 0..=4 {
                let t = cfg.temperature.min + cfg.temperature.span() * i as f64 / 4.0;
                let n = cfg.moles.min + cfg.moles.span() * j as f64 / 4.0;
                let v = cfg.volume.min + cfg.volume.span() * k as f64 / 4.0;
                sim.set_inputs(t, n, v);

                let p = sim.pressure();
                let expected = n * R * t / v;
                assert!(p > 0.0);
                assert!((p - expected).abs() <= expected * 1e-12);
            }
        }
    }
    Ok(())
}

#[test]
fn reset_restores_defaults_and_recomputes() -> ideal_gas::Result<()> {
    let mut sim = fresh(77)?;
    let initial = sim.frame();

    sim.handle(InputEvent::Temperature(950.0));
    sim.handle(InputEvent::Moles(4.5));
    sim.handle(InputEvent::Volume(0.45));
    for _ in 0..30 {
        sim.step(1.0 / 60.0);
    }
    assert_ne!(sim.particles().len(), initial.particles.len());

    sim.handle(InputEvent::Reset);
    assert_eq!(*sim.state(), ThermodynamicState::new(300.0, 1.0, 0.1));

    let after = sim.frame();
    assert_eq!(after.container, initial.container);
    assert_eq!(after.target_count, initial.target_count);
    assert_eq!(after.particles.len(), initial.particles.len());
    assert_eq!(after.pressure, initial.pressure);
    assert_eq!(after.gauge_fraction, initial.gauge_fraction);
    assert_eq!(after.readouts, initial.readouts);
    Ok(())
}

#[test]
fn same_seed_same_trajectory() -> ideal_gas::Result<()> {
    let mut a = fresh(31337)?;
    let mut b = fresh(31337)?;
    for _ in 0..100 {
        a.step(1.0 / 60.0);
        b.step(1.0 / 60.0);
    }
    let pa: Vec<_> = a.frame().particles;
    let pb: Vec<_> = b.frame().particles;
    assert_eq!(pa, pb);
    Ok(())
}

#[test]
fn hotter_gas_travels_further() -> ideal_gas::Result<()> {
    let mut cold = fresh(12)?;
    let mut hot = fresh(12)?;
    cold.handle(InputEvent::Temperature(cold.config().temperature.min));
    hot.handle(InputEvent::Temperature(hot.config().temperature.max));

    let area = cold.container();
    let start: Vec<_> = cold.particles().iter().map(|p| p.position).collect();
    cold.step(0.001);
    hot.step(0.001);

    // skip particles close enough to a wall to bounce within one step
    for (i, s) in start.iter().enumerate() {
        if !area.contains_circle(*s, 4.0) {
            continue;
        }
        let dc = (cold.particles().as_slice()[i].position - *s).length();
        let dh = (hot.particles().as_slice()[i].position - *s).length();
        assert!(dh >= dc * 4.9, "particle {i}: cold {dc}, hot {dh}");
    }
    Ok(())
}
