// Scoring — turns rudeness scores and reactions into badges and rankings.

pub mod brutality;
pub mod tier;
