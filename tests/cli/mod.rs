mod demo;
mod distances;
mod path;
mod show;
mod traverse;
