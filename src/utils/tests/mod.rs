mod coordinate_utils_tests;
