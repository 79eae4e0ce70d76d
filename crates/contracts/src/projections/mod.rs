pub mod order_list;
