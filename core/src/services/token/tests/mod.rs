mod jwt_tests;
