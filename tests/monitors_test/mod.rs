mod models_test;
