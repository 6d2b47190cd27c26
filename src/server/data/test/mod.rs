mod chat;
mod feedback;
mod offer;
mod order;
mod product;
mod subscription;
mod user;
