mod custom_node;
mod path_tree;
