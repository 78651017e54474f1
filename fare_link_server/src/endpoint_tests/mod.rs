mod helpers;
mod linking;
mod mocks;
mod webhook;
