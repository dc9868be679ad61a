mod bricks;
mod dispatch_symmetry;
mod mass_inviolability;
mod pair_checks;
mod resting_contacts;
mod scenarios;
