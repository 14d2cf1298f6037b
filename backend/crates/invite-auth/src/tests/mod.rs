mod bearer;
