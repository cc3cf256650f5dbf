#[macro_use]
extern crate serde_derive;

pub use ghost_minimax::{Action, AdversarialGame, GhostError, Position, Result};

pub mod config;
pub mod directional_ghost;
pub mod maze;
pub mod minimax_ghost;
pub mod random_ghost;

use itertools::Itertools;

use crate::{
    config::GhostConfig, directional_ghost::DirectionalGhostFactory,
    minimax_ghost::MinimaxGhostFactory, random_ghost::RandomGhostFactory,
};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AboutGhost {
    pub name: String,
    pub description: String,
}

pub type BoxedGhost<G> = Box<dyn GhostAI<G> + Send + Sync>;
pub type BoxedFactory<G> = Box<dyn GhostFactory<G> + Send + Sync>;

pub trait GhostAI<G> {
    fn end(&self) {}
    fn get_action(&self, state: &G) -> Result<Action>;
}

pub trait GhostFactory<G> {
    fn name(&self) -> String;
    fn create(&self, config: &GhostConfig) -> Result<BoxedGhost<G>>;

    fn about(&self) -> AboutGhost {
        AboutGhost {
            name: self.name(),
            description: String::new(),
        }
    }
}

pub fn all_factories<G: AdversarialGame + 'static>() -> Vec<BoxedFactory<G>> {
    vec![
        Box::new(MinimaxGhostFactory {}),
        Box::new(RandomGhostFactory {}),
        Box::new(DirectionalGhostFactory {}),
    ]
}

pub fn factory_by_name<G: AdversarialGame + 'static>(name: &str) -> Result<BoxedFactory<G>> {
    let factories = all_factories::<G>();
    let known = factories.iter().map(|f| f.name()).join(", ");

    factories
        .into_iter()
        .find(|f| f.name() == name)
        .ok_or_else(|| GhostError::UnknownGhost {
            name: name.to_owned(),
            known,
        })
}

/// Build whichever ghost the config names
pub fn create_ghost<G: AdversarialGame + 'static>(config: &GhostConfig) -> Result<BoxedGhost<G>> {
    factory_by_name::<G>(&config.ghost)?.create(config)
}
