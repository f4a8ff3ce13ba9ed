use anyhow::{ensure, Context, Result};
use bst_mass::{AddOutcome, Bst};
use log::info;

fn add_expecting(tree: &mut Bst<i64>, key: i64, expected: AddOutcome, mass: usize) -> Result<()> {
    let res = tree.add(key);
    ensure!(
        res == expected,
        "adding {} gave result {} ({}), expected {} ({})",
        key,
        res.code(),
        res,
        expected.code(),
        expected
    );
    ensure!(
        tree.mass() == mass,
        "mass after adding {} is {}, expected {}",
        key,
        tree.mass(),
        mass
    );
    Ok(())
}

fn scenario_one_key() -> Result<()> {
    let mut tree = Bst::new();
    add_expecting(&mut tree, 10, AddOutcome::Inserted, 1)?;
    add_expecting(&mut tree, 10, AddOutcome::AlreadyPresent, 1)?;
    Ok(())
}

fn scenario_three_keys() -> Result<()> {
    let mut tree = Bst::new();
    add_expecting(&mut tree, 100, AddOutcome::Inserted, 1)?;
    add_expecting(&mut tree, 300, AddOutcome::Inserted, 2)?;
    add_expecting(&mut tree, 50, AddOutcome::Inserted, 3)?;

    for key in [100, 300, 50] {
        add_expecting(&mut tree, key, AddOutcome::AlreadyPresent, 3)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    scenario_one_key().context("bst with one key")?;
    info!("bst with one key: ok");
    scenario_three_keys().context("bst with three keys")?;
    info!("bst with three keys: ok");
    Ok(())
}
