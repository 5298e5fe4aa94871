mod attr;
mod fib;
mod forwarder;
mod name;
mod pit;
mod queues;
mod viz_meta;
