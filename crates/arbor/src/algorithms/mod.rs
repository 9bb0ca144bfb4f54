pub mod breadth_first;
