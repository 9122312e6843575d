mod color;
mod random;
mod ray;

pub use color::{hsv_to_rgb, Color};
pub use random::{random_color, Entropy, HashEntropy, ReplayEntropy};
pub use ray::{aabb_normal, intersect_aabb, intersect_sphere, Ray};
